// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use flate2::Compression;
use flate2::write::DeflateEncoder;
use tracing::debug;
use versus_arena_domain::{Bracket, Participant};

use crate::error::CodecError;
use crate::payload::{FORMAT_VERSION, SharePayload, SharedParticipant, vote_symbol};

/// Encodes a tournament into a string safe to drop into a URL query
/// parameter.
///
/// `participants` must be in seeded order, the order round one was paired
/// from. The same inputs always produce the same string.
///
/// # Arguments
///
/// * `participants` - The seeded participant list
/// * `bracket` - The bracket in its current state
/// * `id_suffix` - The part of the tournament id after `tournament-`
///
/// # Errors
///
/// Returns an error if the participant count does not match the bracket
/// size, or if serialization or compression fails.
pub fn encode(
    participants: &[Participant],
    bracket: &Bracket,
    id_suffix: &str,
) -> Result<String, CodecError> {
    if participants.len() != bracket.size {
        return Err(CodecError::SizeMismatch {
            bracket_size: bracket.size,
            participants: participants.len(),
        });
    }

    let payload: SharePayload = SharePayload {
        version: FORMAT_VERSION,
        participants: participants.iter().map(SharedParticipant::from).collect(),
        votes: bracket.all_matches().map(vote_symbol).collect(),
        id_suffix: id_suffix.to_string(),
        size: bracket.size,
    };

    let json: Vec<u8> = serde_json::to_vec(&payload)?;
    let mut encoder: DeflateEncoder<Vec<u8>> = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&json)?;
    let compressed: Vec<u8> = encoder.finish()?;
    let encoded: String = URL_SAFE_NO_PAD.encode(compressed);

    debug!(
        size = bracket.size,
        json_bytes = json.len(),
        encoded_len = encoded.len(),
        "Encoded share link"
    );

    Ok(encoded)
}
