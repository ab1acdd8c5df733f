use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{PlayerColor, PlayerId, SessionView};

/// Reasons a session action was refused. A refused action never changes the
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum SessionError {
    #[error("need 4-6 players to start, have {count}")]
    InvalidPlayerCount { count: usize },
    #[error("player {player_id} has no name")]
    MissingPlayerName { player_id: PlayerId },
    #[error("roster already holds 6 players")]
    RosterFull,
    #[error("player {player_id} not found")]
    PlayerNotFound { player_id: PlayerId },
    #[error("color {color} is already taken")]
    ColorInUse { color: PlayerColor },
    #[error("new order must list every current player exactly once")]
    InvalidReorder,
    #[error("not allowed during {actual}, only during {expected}")]
    WrongView {
        expected: SessionView,
        actual: SessionView,
    },
    #[error("the narrator does not guess or receive votes")]
    NarratorHasNoInput,
}
