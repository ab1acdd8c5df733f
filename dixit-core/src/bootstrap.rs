use dixit_types::{Player, PlayerColor, MAX_PLAYERS};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    pub name: String,
    /// Requested palette key, unvalidated.
    pub color: Option<String>,
}

/// Roster supplied out-of-band at startup, e.g. from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSeed {
    pub entries: Vec<SeedEntry>,
}

impl RosterSeed {
    /// Parse comma-separated names and an optional, position-aligned list of
    /// comma-separated color keys.
    pub fn parse(players: &str, colors: Option<&str>) -> Self {
        if players.is_empty() {
            return Self::default();
        }

        let colors: Vec<&str> = colors.map(|c| c.split(',').collect()).unwrap_or_default();
        let entries = players
            .split(',')
            .enumerate()
            .map(|(index, name)| SeedEntry {
                name: name.trim().to_string(),
                color: colors
                    .get(index)
                    .map(|c| c.trim())
                    .filter(|c| !c.is_empty())
                    .map(str::to_string),
            })
            .collect();

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the starting roster. Entries past the roster cap are dropped.
    /// A missing, unknown, or already claimed color falls back to the first
    /// free palette color.
    pub fn build_roster(&self) -> Vec<Player> {
        let mut roster: Vec<Player> = Vec::new();

        for entry in self.entries.iter().take(MAX_PLAYERS) {
            let requested = entry.color.as_deref().and_then(|key| match key.parse::<PlayerColor>() {
                Ok(color) => Some(color),
                Err(e) => {
                    warn!("Ignoring seed color for '{}': {}", entry.name, e);
                    None
                }
            });

            let color = match requested {
                Some(color) if !roster.iter().any(|p| p.color == color) => color,
                Some(color) => {
                    warn!("Seed color {} for '{}' is already taken", color, entry.name);
                    PlayerColor::first_available(roster.iter().map(|p| &p.color))
                }
                None => PlayerColor::first_available(roster.iter().map(|p| &p.color)),
            };

            roster.push(Player::new(entry.name.clone(), color));
        }

        if self.entries.len() > MAX_PLAYERS {
            warn!(
                "Seed lists {} players, keeping the first {}",
                self.entries.len(),
                MAX_PLAYERS
            );
        }

        roster
    }
}
