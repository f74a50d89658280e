// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Prefix carried by every tournament identifier.
pub const TOURNAMENT_ID_PREFIX: &str = "tournament-";

/// The tournament sizes a new session may be started with.
///
/// The bracket engine accepts any power of two, but these are the only
/// sizes offered when starting a tournament.
pub const SUPPORTED_SIZES: [usize; 3] = [8, 16, 32];

/// A stable, unique identifier for a participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a new participant identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace only.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value: String = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidParticipantId(String::from(
                "Participant id cannot be empty",
            )));
        }
        Ok(Self(value))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ParticipantId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ParticipantId> for String {
    fn from(id: ParticipantId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A competitor in a bracket: a song, a streamer, an image.
///
/// The engine only ever looks at `id`. Everything else is display data
/// carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Stable unique identifier.
    pub id: ParticipantId,
    /// Display name.
    pub name: String,
    /// Display image reference (usually a URL).
    pub image: String,
    /// Secondary display line such as an artist or channel name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Link back to the participant's source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

// Participants are compared by identity only. Two records with the same id
// are the same competitor even if one of them lost display fields on the way
// through a share link.
impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Participant {}

impl std::hash::Hash for Participant {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Participant {
    /// Creates a participant with no subtitle or link.
    #[must_use]
    pub fn new(id: ParticipantId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            subtitle: None,
            link: None,
        }
    }

    /// Sets the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the source link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Identifies a tournament session, e.g. `tournament-1767225600000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TournamentId(String);

impl TournamentId {
    /// Builds an identifier from its suffix, adding the `tournament-` prefix.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Self {
        Self(format!("{TOURNAMENT_ID_PREFIX}{suffix}"))
    }

    /// Wraps a full identifier. A missing prefix is added.
    #[must_use]
    pub fn new(value: &str) -> Self {
        if value.starts_with(TOURNAMENT_ID_PREFIX) {
            Self(value.to_string())
        } else {
            Self::from_suffix(value)
        }
    }

    /// Returns the full identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the identifier without its `tournament-` prefix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        self.0
            .strip_prefix(TOURNAMENT_ID_PREFIX)
            .unwrap_or(self.0.as_str())
    }
}

impl std::fmt::Display for TournamentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
