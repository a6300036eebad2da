// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `catalog`: organizations, sites, roles, collaborators, missions
//! - `planning`: templates, shift instances, assignments, availability, rules
//! - `audit`: planning changes and publications
//!
//! Every list is ordered by primary key.

pub mod audit;
pub mod catalog;
pub mod planning;
