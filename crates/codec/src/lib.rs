// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Share links for tournaments.
//!
//! A link carries the seeded participant list and one vote symbol per match.
//! Decoding rebuilds the bracket without shuffling and replays the votes, so
//! the recipient ends up with exactly the bracket the sender had.

mod decode;
mod encode;
mod error;
mod payload;

#[cfg(test)]
mod tests;

pub use decode::{DecodedTournament, decode, try_decode};
pub use encode::encode;
pub use error::{CodecError, DecodeError};
pub use payload::{FORMAT_VERSION, MAX_INFLATED_BYTES, MAX_NAME_CHARS};
