use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::PlayerId;

/// The fixed palette a player's marker color is drawn from.
///
/// Declaration order matters: a new player receives the first color in this
/// order that nobody else is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PlayerColor {
    Green,
    Yellow,
    Orange,
    Blue,
    Purple,
    Pink,
    Red,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 7] = [
        PlayerColor::Green,
        PlayerColor::Yellow,
        PlayerColor::Orange,
        PlayerColor::Blue,
        PlayerColor::Purple,
        PlayerColor::Pink,
        PlayerColor::Red,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PlayerColor::Green => "green",
            PlayerColor::Yellow => "yellow",
            PlayerColor::Orange => "orange",
            PlayerColor::Blue => "blue",
            PlayerColor::Purple => "purple",
            PlayerColor::Pink => "pink",
            PlayerColor::Red => "red",
        }
    }

    /// First palette color not present in `used`, or the first palette entry
    /// when every color is taken.
    pub fn first_available<'a, I>(used: I) -> PlayerColor
    where
        I: IntoIterator<Item = &'a PlayerColor>,
    {
        let used: Vec<PlayerColor> = used.into_iter().copied().collect();
        PlayerColor::ALL
            .into_iter()
            .find(|color| !used.contains(color))
            .unwrap_or(PlayerColor::Green)
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}'")]
pub struct ParseColorError(pub String);

impl FromStr for PlayerColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        PlayerColor::ALL
            .into_iter()
            .find(|color| color.key() == key)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    pub id: PlayerId,
    /// Stored exactly as typed; only trimmed when checking for blankness.
    pub name: String,
    pub color: PlayerColor,
    pub score: i32,
}

impl Player {
    pub fn new(name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color,
            score: 0,
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing_is_lenient() {
        assert_eq!(" Blue ".parse::<PlayerColor>(), Ok(PlayerColor::Blue));
        assert_eq!("PINK".parse::<PlayerColor>(), Ok(PlayerColor::Pink));
        assert!("teal".parse::<PlayerColor>().is_err());
        assert!("".parse::<PlayerColor>().is_err());
    }

    #[test]
    fn test_first_available_follows_palette_order() {
        assert_eq!(PlayerColor::first_available(&[]), PlayerColor::Green);
        assert_eq!(
            PlayerColor::first_available(&[PlayerColor::Green, PlayerColor::Orange]),
            PlayerColor::Yellow
        );
        // Everything taken falls back to the first entry
        assert_eq!(PlayerColor::first_available(&PlayerColor::ALL), PlayerColor::Green);
    }

    #[test]
    fn test_blank_names() {
        let mut player = Player::new("   ", PlayerColor::Red);
        assert!(!player.has_name());
        player.name = "  Ola ".to_string();
        assert!(player.has_name());
        assert_eq!(player.name, "  Ola ");
        assert_eq!(player.score, 0);
    }
}
