// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Parser, ValueEnum};
use shiftplan::{DEFAULT_ORGANIZATION_ID, InMemoryStore, PlanningContext};
use shiftplan_persistence::{PersistenceError, SqliteStore};
use tracing::info;

/// Entity store backends selectable at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Process-local store; everything is lost on exit.
    Memory,
    /// `SQLite` through diesel, file-backed or in-memory.
    Sqlite,
}

/// Shift planning server - HTTP API for shifts, assignments and conflicts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind to
    #[arg(long, env = "SHIFTPLAN_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to bind the server to
    #[arg(short, long, env = "SHIFTPLAN_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Entity store backend
    #[arg(long, env = "SHIFTPLAN_BACKEND", value_enum, default_value_t = Backend::Memory)]
    pub backend: Backend,

    /// Path to the `SQLite` database file. In-memory `SQLite` when omitted.
    #[arg(short, long, env = "SHIFTPLAN_DATABASE")]
    pub database: Option<String>,

    /// Log filter, e.g. `info` or `shiftplan=debug,tower=warn`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Organization used for audit records and publications when a request names none
    #[arg(long, env = "SHIFTPLAN_DEFAULT_ORG", default_value_t = DEFAULT_ORGANIZATION_ID)]
    pub default_organization_id: i64,
}

/// Builds the planning context for the configured backend.
///
/// # Errors
///
/// Returns an error if the `SQLite` database cannot be opened or migrated.
pub fn build_context(args: &Args) -> Result<PlanningContext, PersistenceError> {
    let ctx = match args.backend {
        Backend::Memory => {
            info!("Using in-memory entity store");
            PlanningContext::new(InMemoryStore::new())
        }
        Backend::Sqlite => {
            let store = if let Some(db_path) = &args.database {
                info!(path = %db_path, "Using file-based SQLite database");
                SqliteStore::new_with_file(db_path)?
            } else {
                info!("Using in-memory SQLite database");
                SqliteStore::new_in_memory()?
            };
            PlanningContext::new(store)
        }
    };
    Ok(ctx.with_default_organization(args.default_organization_id))
}
