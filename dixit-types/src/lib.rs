pub mod errors;
pub mod player;
pub mod session;

// Re-export all types
pub use errors::*;
pub use player::*;
pub use session::*;

pub type PlayerId = uuid::Uuid;

/// Most players a roster can hold, before and after the game starts.
pub const MAX_PLAYERS: usize = 6;

/// Fewest players needed to start a game.
pub const MIN_PLAYERS: usize = 4;
