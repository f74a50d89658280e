// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use versus_arena::CoreError;
use versus_arena_codec::CodecError;
use versus_arena_domain::DomainError;
use versus_arena_persistence::PersistenceError;

/// Errors a command can end with.
#[derive(Debug)]
pub enum CliError {
    /// Reading input or writing output failed.
    Io(std::io::Error),
    /// The participants file is not a JSON array of participants.
    InvalidParticipants(String),
    /// The bracket engine rejected the request.
    Core(CoreError),
    /// The share link could not be built.
    Codec(CodecError),
    /// The share code could not be decoded.
    InvalidShareCode,
    /// The store failed.
    Persistence(PersistenceError),
    /// The command needs a tournament in progress.
    NoTournament,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::InvalidParticipants(msg) => write!(f, "Invalid participants file: {msg}"),
            Self::Core(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "{err}"),
            Self::InvalidShareCode => write!(f, "Share code is invalid or corrupted"),
            Self::Persistence(err) => write!(f, "{err}"),
            Self::NoTournament => write!(
                f,
                "No tournament in progress. Start one with `versus-arena start <FILE>`"
            ),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::Core(err)
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::Core(CoreError::from(err))
    }
}

impl From<CodecError> for CliError {
    fn from(err: CodecError) -> Self {
        Self::Codec(err)
    }
}

impl From<PersistenceError> for CliError {
    fn from(err: PersistenceError) -> Self {
        Self::Persistence(err)
    }
}
