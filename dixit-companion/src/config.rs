use anyhow::{Context, Result};
use dixit_core::RosterSeed;
use std::env;

use crate::localization::Language;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub language: Language,
    /// Comma-separated player names to pre-seed the roster with.
    pub players: Option<String>,
    /// Comma-separated palette keys, aligned with `players`.
    pub colors: Option<String>,
}

impl Config {
    /// Read `DIXIT_LANG`, `DIXIT_PLAYERS` and `DIXIT_COLORS`.
    pub fn from_env() -> Result<Self> {
        let language = match env::var("DIXIT_LANG") {
            Ok(value) => value
                .parse::<Language>()
                .with_context(|| format!("Invalid DIXIT_LANG '{}'", value))?,
            Err(_) => Language::default(),
        };

        Ok(Self {
            language,
            players: env::var("DIXIT_PLAYERS").ok().filter(|v| !v.is_empty()),
            colors: env::var("DIXIT_COLORS").ok().filter(|v| !v.is_empty()),
        })
    }

    /// Command-line values take precedence over the environment.
    pub fn with_overrides(
        mut self,
        language: Option<Language>,
        players: Option<String>,
        colors: Option<String>,
    ) -> Self {
        if let Some(language) = language {
            self.language = language;
        }
        if players.is_some() {
            self.players = players;
        }
        if colors.is_some() {
            self.colors = colors;
        }
        self
    }

    pub fn roster_seed(&self) -> RosterSeed {
        match &self.players {
            Some(players) => RosterSeed::parse(players, self.colors.as_deref()),
            None => RosterSeed::default(),
        }
    }
}
