// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! Only `SQLite` is supported. Backend-specific code is limited to
//! connection initialization, migration execution and PRAGMA configuration.
//! Queries and mutations live in `queries/` and `mutations/`.

pub mod sqlite;
