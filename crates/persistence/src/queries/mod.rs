// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.

mod tournaments;

pub use tournaments::{get_current_tournament, get_tournament, list_tournaments};
