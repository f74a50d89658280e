// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::Read;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use flate2::read::DeflateDecoder;
use time::OffsetDateTime;
use tracing::{debug, warn};
use versus_arena::{CoreError, Seeding, Tournament, create_bracket, record_slot_vote};
use versus_arena_domain::{Bracket, MatchId, Participant, ParticipantId, Slot, TournamentId};

use crate::error::DecodeError;
use crate::payload::{FORMAT_VERSION, MAX_INFLATED_BYTES, SharePayload, parse_vote_symbol};

/// A tournament rebuilt from a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTournament {
    /// Id the sender's tournament had.
    pub id: TournamentId,
    /// Participants in seeded order. Names may be truncated; `subtitle` and
    /// `link` are not carried and are always `None`.
    pub participants: Vec<Participant>,
    /// The bracket with every recorded vote replayed.
    pub bracket: Bracket,
}

impl DecodedTournament {
    /// Turns the decoded data into a session opened at `now`.
    #[must_use]
    pub fn into_tournament(self, now: OffsetDateTime) -> Tournament {
        Tournament::from_parts(self.id, self.participants, self.bracket, now)
    }
}

/// Decodes a share link, returning `None` if it is malformed in any way.
///
/// Failures are logged rather than returned; use [`try_decode`] to find out
/// what went wrong.
#[must_use]
pub fn decode(encoded: &str) -> Option<DecodedTournament> {
    match try_decode(encoded) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            warn!(error = %err, "Failed to decode share link");
            None
        }
    }
}

/// Decodes a share link.
///
/// The bracket is rebuilt from the participant list without shuffling and
/// every recorded vote is replayed in round-then-position order.
///
/// # Errors
///
/// Returns an error if the string is not valid base64, does not decompress,
/// is not a share payload of a known version, or describes a bracket that
/// cannot be reached by legal votes.
pub fn try_decode(encoded: &str) -> Result<DecodedTournament, DecodeError> {
    let compressed: Vec<u8> = URL_SAFE_NO_PAD.decode(encoded.trim())?;

    let mut json: Vec<u8> = Vec::new();
    let limit: u64 = u64::try_from(MAX_INFLATED_BYTES).unwrap_or(u64::MAX);
    DeflateDecoder::new(compressed.as_slice())
        .take(limit + 1)
        .read_to_end(&mut json)?;
    if json.len() > MAX_INFLATED_BYTES {
        return Err(DecodeError::TooLarge {
            limit: MAX_INFLATED_BYTES,
        });
    }

    let payload: SharePayload = serde_json::from_slice(&json)?;
    if payload.version != FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion(payload.version));
    }
    if payload.size != payload.participants.len() {
        return Err(DecodeError::SizeMismatch {
            declared: payload.size,
            actual: payload.participants.len(),
        });
    }

    let participants: Vec<Participant> = payload
        .participants
        .into_iter()
        .map(|shared| {
            ParticipantId::new(shared.id)
                .map(|id| Participant::new(id, shared.name, shared.image))
                .map_err(CoreError::from)
        })
        .collect::<Result<_, _>>()?;

    let mut bracket: Bracket = create_bracket(&participants, Seeding::Preserved)?;

    let match_ids: Vec<MatchId> = bracket.all_matches().map(|m| m.id).collect();
    let vote_count: usize = payload.votes.chars().count();
    if vote_count != match_ids.len() {
        return Err(DecodeError::VoteCountMismatch {
            expected: match_ids.len(),
            actual: vote_count,
        });
    }

    for (match_id, symbol) in match_ids.into_iter().zip(payload.votes.chars()) {
        let Some(slot): Option<Slot> =
            parse_vote_symbol(symbol).map_err(DecodeError::UnknownVoteSymbol)?
        else {
            continue;
        };
        bracket = record_slot_vote(&bracket, &match_id, slot)
            .map_err(|source| DecodeError::Replay { match_id, source })?;
    }

    let id: TournamentId = TournamentId::from_suffix(&payload.id_suffix);
    debug!(%id, size = bracket.size, "Decoded share link");

    Ok(DecodedTournament {
        id,
        participants,
        bracket,
    })
}
