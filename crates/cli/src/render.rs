// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text views of tournaments.

use std::fmt::Write;

use versus_arena::{Tournament, VoteEvent, round_name};
use versus_arena_domain::{Bracket, Match, Participant, Progress};
use versus_arena_persistence::TournamentSummary;

const EMPTY_SLOT: &str = "TBD";

fn name_of(participant: Option<&Participant>) -> &str {
    participant.map_or(EMPTY_SLOT, |p| p.name.as_str())
}

/// `"Name A vs Name B"`, with `TBD` for empty slots.
pub fn render_pairing(m: &Match) -> String {
    format!("{} vs {}", name_of(m.slot_a.as_ref()), name_of(m.slot_b.as_ref()))
}

pub fn render_progress(progress: &Progress) -> String {
    format!(
        "{}/{} matches decided ({}%)",
        progress.completed, progress.total, progress.percentage
    )
}

/// What to vote on next, or who won.
pub fn render_up_next(tournament: &Tournament) -> String {
    if let Some(champion) = tournament.champion() {
        return format!("Champion: {}", champion.name);
    }
    match tournament.current_match() {
        Some(m) => format!(
            "{}, match {} ({}): [a] {} vs [b] {}",
            round_name(m.round_number, tournament.bracket.total_rounds()),
            m.match_number,
            m.id,
            name_of(m.slot_a.as_ref()),
            name_of(m.slot_b.as_ref())
        ),
        None => String::from("No match is ready for a vote"),
    }
}

pub fn render_status(tournament: &Tournament) -> String {
    let mut out: String = format!("Tournament {}", tournament.id);
    if let Some(category) = &tournament.category {
        let _ = write!(out, " ({category})");
    }
    let _ = write!(
        out,
        "\n{} participants, {}\n{}",
        tournament.bracket.size,
        render_progress(&tournament.progress()),
        render_up_next(tournament)
    );
    out
}

/// Every round, one match per line, with the winner marked.
pub fn render_bracket(bracket: &Bracket) -> String {
    let total_rounds: u32 = bracket.total_rounds();
    let mut out: String = String::new();
    for (round, number) in bracket.rounds.iter().zip(1_u32..) {
        let _ = writeln!(out, "{}", round_name(number, total_rounds));
        for m in round {
            let _ = write!(out, "  {:<6} {}", m.id.to_string(), render_pairing(m));
            if let Some(winner) = &m.winner {
                let _ = write!(out, "  -> {}", winner.name);
            }
            out.push('\n');
        }
    }
    if let Some(champion) = &bracket.champion {
        let _ = writeln!(out, "Champion: {}", champion.name);
    }
    out
}

pub fn render_vote(event: &VoteEvent) -> String {
    format!(
        "{}: {} beats {}",
        event.round_name, event.winner.name, event.loser.name
    )
}

pub fn render_summaries(summaries: &[TournamentSummary]) -> String {
    if summaries.is_empty() {
        return String::from("No saved tournaments");
    }
    let mut out: String = String::new();
    for summary in summaries {
        let saved_at: String = summary.saved_at.date().to_string();
        let _ = write!(out, "{}  {} participants  saved {saved_at}", summary.id, summary.size);
        if let Some(champion) = &summary.champion {
            let _ = write!(out, "  champion: {champion}");
        }
        out.push('\n');
    }
    out
}
