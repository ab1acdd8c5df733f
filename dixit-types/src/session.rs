use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::{Player, PlayerColor, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SessionView {
    Setup,     // Roster editing
    Round,     // Collecting guesses and votes
    Scoreboard, // Standings after a scored round
}

impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionView::Setup => "setup",
            SessionView::Round => "round",
            SessionView::Scoreboard => "scoreboard",
        };
        f.write_str(name)
    }
}

/// What a single non-narrator player reported for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayerInput {
    pub player_id: PlayerId,
    /// Whether they picked the narrator's card.
    pub guessed: bool,
    /// How many other players voted for the card they submitted.
    pub votes: u32,
}

/// Per-round input buffer. One entry per non-narrator player, in roster
/// order; the narrator never has an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundInput {
    pub narrator_id: PlayerId,
    pub entries: Vec<PlayerInput>,
}

impl RoundInput {
    /// Fresh input for a round narrated by `roster[narrator_index]`.
    pub fn for_round(roster: &[Player], narrator_index: usize) -> Self {
        let narrator_id = roster[narrator_index].id;
        let entries = roster
            .iter()
            .filter(|p| p.id != narrator_id)
            .map(|p| PlayerInput {
                player_id: p.id,
                guessed: false,
                votes: 0,
            })
            .collect();

        Self {
            narrator_id,
            entries,
        }
    }

    pub fn get(&self, player_id: PlayerId) -> Option<&PlayerInput> {
        self.entries.iter().find(|e| e.player_id == player_id)
    }

    pub fn get_mut(&mut self, player_id: PlayerId) -> Option<&mut PlayerInput> {
        self.entries.iter_mut().find(|e| e.player_id == player_id)
    }

    pub fn correct_guesses(&self) -> usize {
        self.entries.iter().filter(|e| e.guessed).count()
    }

    pub fn total_votes(&self) -> u32 {
        self.entries.iter().map(|e| e.votes).sum()
    }
}

/// Which base-award rule a round was scored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ScoringBranch {
    /// Nobody or everybody found the narrator's card.
    AllOrNone,
    /// Some, but not all, players found it.
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundScore {
    pub player_id: PlayerId,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundRecord {
    pub round_number: u32,
    pub narrator_id: PlayerId,
    pub branch: ScoringBranch,
    /// Points awarded this round, in roster order, narrator included.
    pub scores: Vec<RoundScore>,
    pub recorded_at: String, // ISO 8601 string
}

impl RoundRecord {
    pub fn points_for(&self, player_id: PlayerId) -> Option<i32> {
        self.scores
            .iter()
            .find(|s| s.player_id == player_id)
            .map(|s| s.points)
    }

    pub fn total_points(&self) -> i32 {
        self.scores.iter().map(|s| s.points).sum()
    }
}

/// One row of the ranked scoreboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Standing {
    pub rank: u32,
    pub player: Player,
}

/// A palette entry as offered to one player's color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorOption {
    pub color: PlayerColor,
    /// Held by some other player; cannot be picked.
    pub in_use: bool,
    /// The player's own current color.
    pub selected: bool,
}

/// Read-only projection of a session for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    pub view: SessionView,
    pub round_number: u32,
    pub roster: Vec<Player>,
    pub narrator_id: Option<PlayerId>,
    pub round_input: Option<RoundInput>,
    pub last_round: Option<RoundRecord>,
}
