// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_participant;
use crate::{DomainError, Participant, ParticipantId, TournamentId};

#[test]
fn test_participant_id_creation() {
    let id: ParticipantId = ParticipantId::new("yt-abc123").unwrap();
    assert_eq!(id.value(), "yt-abc123");
    assert_eq!(id.to_string(), "yt-abc123");
}

#[test]
fn test_participant_id_rejects_empty() {
    let result: Result<ParticipantId, DomainError> = ParticipantId::new("   ");
    assert!(matches!(result, Err(DomainError::InvalidParticipantId(_))));
}

#[test]
fn test_participant_equality_ignores_display_fields() {
    let original: Participant = create_test_participant("A")
        .with_subtitle("Some Artist")
        .with_link("https://www.youtube.com/watch?v=A");
    let stripped: Participant = Participant::new(
        ParticipantId::new("A").unwrap(),
        "Different title",
        "",
    );

    assert_eq!(original, stripped);
    assert_ne!(original, create_test_participant("B"));
}

#[test]
fn test_participant_deserialize_rejects_empty_id() {
    let json: &str = r#"{"id": "", "name": "Nope", "image": ""}"#;
    let result: Result<Participant, serde_json::Error> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_participant_deserialize_without_optional_fields() {
    let json: &str = r#"{"id": "p1", "name": "First", "image": "https://img.example/1.jpg"}"#;
    let participant: Participant = serde_json::from_str(json).unwrap();
    assert_eq!(participant.id.value(), "p1");
    assert_eq!(participant.name, "First");
    assert!(participant.subtitle.is_none());
    assert!(participant.link.is_none());
}

#[test]
fn test_tournament_id_prefix_handling() {
    let from_suffix: TournamentId = TournamentId::from_suffix("1767225600000");
    assert_eq!(from_suffix.value(), "tournament-1767225600000");
    assert_eq!(from_suffix.suffix(), "1767225600000");

    let full: TournamentId = TournamentId::new("tournament-42");
    assert_eq!(full.value(), "tournament-42");
    assert_eq!(full.suffix(), "42");

    let bare: TournamentId = TournamentId::new("42");
    assert_eq!(bare, full);
}
