// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;
use versus_arena::CoreError;
use versus_arena_domain::MatchId;

/// Errors that can occur while producing a share link.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The participant list does not match the bracket it is shared with.
    #[error("Bracket has {bracket_size} slots but {participants} participants were given")]
    SizeMismatch {
        bracket_size: usize,
        participants: usize,
    },

    /// The payload could not be serialized.
    #[error("Failed to serialize share payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The payload could not be compressed.
    #[error("Failed to compress share payload: {0}")]
    Compress(#[from] std::io::Error),
}

/// Reasons a share link could not be turned back into a tournament.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not URL-safe base64.
    #[error("Share code is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The compressed stream is corrupt or truncated.
    #[error("Share code could not be decompressed: {0}")]
    Inflate(#[from] std::io::Error),

    /// The decompressed payload is larger than any real tournament.
    #[error("Share payload exceeds {limit} bytes")]
    TooLarge { limit: usize },

    /// The payload is not the expected JSON shape.
    #[error("Share payload is malformed: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload was written by an unknown format version.
    #[error("Unsupported share format version {0}")]
    UnsupportedVersion(u32),

    /// The declared size disagrees with the participant list.
    #[error("Share payload declares {declared} participants but carries {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    /// The vote string is not one symbol per match.
    #[error("Expected {expected} vote symbols, found {actual}")]
    VoteCountMismatch { expected: usize, actual: usize },

    /// A vote symbol other than 0, 1 or 2.
    #[error("Unknown vote symbol '{0}'")]
    UnknownVoteSymbol(char),

    /// The participant list could not be turned into a bracket.
    #[error("Could not rebuild bracket: {0}")]
    Bracket(#[from] CoreError),

    /// A recorded vote could not be applied while replaying.
    #[error("Could not replay vote for match {match_id}: {source}")]
    Replay {
        match_id: MatchId,
        #[source]
        source: CoreError,
    },
}
