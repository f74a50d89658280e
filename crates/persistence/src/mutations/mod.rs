// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations. Each one runs in its own transaction.

mod tournaments;

pub use tournaments::{clear_current_tournament, delete_tournament, save_tournament};
