// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Inserts return the rowid `SQLite` assigned. Updates and deletes of a
//! missing row affect nothing and succeed.

pub mod audit;
pub mod catalog;
pub mod planning;
