use crate::{RosterSeed, ScoringEngine, SessionEvent};
use dixit_types::{
    ColorOption, Player, PlayerColor, PlayerId, PlayerInput, RoundInput, RoundRecord,
    SessionError, SessionSnapshot, SessionView, Standing, MAX_PLAYERS, MIN_PLAYERS,
};
use tracing::{debug, info, warn};

pub type SessionResult = Result<SessionEvent, SessionError>;

/// One scorekeeping session: the roster, the round being collected, and the
/// history of scored rounds.
///
/// The session moves between three views. Roster edits are only accepted in
/// [`SessionView::Setup`], round input only in [`SessionView::Round`], and
/// the scoreboard is left with [`Session::next_round`]. A refused action
/// leaves the session exactly as it was.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Vec<Player>,
    history: Vec<RoundRecord>,
    narrator_index: usize,
    view: SessionView,
    round_input: Option<RoundInput>,
    seed: RosterSeed,
}

impl Session {
    /// A session holding a single blank player.
    pub fn new() -> Self {
        Self::with_seed(RosterSeed::default())
    }

    /// A session whose starting roster comes from `seed`. An empty seed
    /// yields a single blank player.
    pub fn with_seed(seed: RosterSeed) -> Self {
        let mut roster = seed.build_roster();
        if roster.is_empty() {
            roster.push(Self::blank_player(&roster));
        }

        Self {
            roster,
            history: Vec::new(),
            narrator_index: 0,
            view: SessionView::Setup,
            round_input: None,
            seed,
        }
    }

    fn blank_player(roster: &[Player]) -> Player {
        let color = PlayerColor::first_available(roster.iter().map(|p| &p.color));
        Player::new(String::new(), color)
    }

    fn require_view(&self, expected: SessionView) -> Result<(), SessionError> {
        if self.view == expected {
            Ok(())
        } else {
            Err(self.rejected(SessionError::WrongView {
                expected,
                actual: self.view,
            }))
        }
    }

    fn rejected(&self, error: SessionError) -> SessionError {
        warn!("Rejected action in {} view: {}", self.view, error);
        error
    }

    fn position_of(&self, player_id: PlayerId) -> Result<usize, SessionError> {
        self.roster
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| self.rejected(SessionError::PlayerNotFound { player_id }))
    }

    // Setup

    pub fn add_player(&mut self) -> SessionResult {
        self.require_view(SessionView::Setup)?;
        if self.roster.len() >= MAX_PLAYERS {
            return Err(self.rejected(SessionError::RosterFull));
        }

        let player = Self::blank_player(&self.roster);
        info!("Added player {} with color {}", player.id, player.color);
        self.roster.push(player.clone());

        Ok(SessionEvent::PlayerAdded { player })
    }

    /// Remove a player. Removing the only player seeds a fresh blank one in
    /// its place so the setup roster is never empty.
    pub fn remove_player(&mut self, player_id: PlayerId) -> SessionResult {
        self.require_view(SessionView::Setup)?;
        let index = self.position_of(player_id)?;

        self.roster.remove(index);
        info!("Removed player {}", player_id);

        let replacement = if self.roster.is_empty() {
            let player = Self::blank_player(&self.roster);
            debug!("Roster emptied, seeding blank player {}", player.id);
            self.roster.push(player.clone());
            Some(player)
        } else {
            None
        };

        Ok(SessionEvent::PlayerRemoved {
            player_id,
            replacement,
        })
    }

    pub fn rename_player(&mut self, player_id: PlayerId, name: impl Into<String>) -> SessionResult {
        self.require_view(SessionView::Setup)?;
        let index = self.position_of(player_id)?;

        let name = name.into();
        debug!("Renamed player {} to '{}'", player_id, name);
        self.roster[index].name = name.clone();

        Ok(SessionEvent::PlayerRenamed { player_id, name })
    }

    pub fn recolor_player(&mut self, player_id: PlayerId, color: PlayerColor) -> SessionResult {
        self.require_view(SessionView::Setup)?;
        let index = self.position_of(player_id)?;

        if self
            .roster
            .iter()
            .any(|p| p.id != player_id && p.color == color)
        {
            return Err(self.rejected(SessionError::ColorInUse { color }));
        }

        debug!("Player {} now uses {}", player_id, color);
        self.roster[index].color = color;

        Ok(SessionEvent::PlayerRecolored { player_id, color })
    }

    /// Reorder the roster to `order`, which must list every current player
    /// exactly once. The new order is the narrator rotation order.
    pub fn reorder_roster(&mut self, order: &[PlayerId]) -> SessionResult {
        self.require_view(SessionView::Setup)?;

        let is_permutation = order.len() == self.roster.len()
            && self.roster.iter().all(|p| order.contains(&p.id))
            && order
                .iter()
                .enumerate()
                .all(|(i, id)| !order[..i].contains(id));
        if !is_permutation {
            return Err(self.rejected(SessionError::InvalidReorder));
        }

        let mut reordered = Vec::with_capacity(self.roster.len());
        for id in order {
            if let Some(player) = self.roster.iter().find(|p| p.id == *id) {
                reordered.push(player.clone());
            }
        }
        self.roster = reordered;
        info!("Roster reordered");

        Ok(SessionEvent::RosterReordered {
            order: order.to_vec(),
        })
    }

    /// Move one player to `to_index`, shifting the others. Indexes past the
    /// end move the player last.
    pub fn move_player(&mut self, player_id: PlayerId, to_index: usize) -> SessionResult {
        self.require_view(SessionView::Setup)?;
        let from = self.position_of(player_id)?;

        let mut order: Vec<PlayerId> = self.roster.iter().map(|p| p.id).collect();
        let id = order.remove(from);
        order.insert(to_index.min(order.len()), id);

        self.reorder_roster(&order)
    }

    /// Whether `start_game` would be accepted right now. The player count is
    /// checked before names.
    pub fn start_readiness(&self) -> Result<(), SessionError> {
        let count = self.roster.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SessionError::InvalidPlayerCount { count });
        }

        match self.roster.iter().find(|p| !p.has_name()) {
            Some(player) => Err(SessionError::MissingPlayerName {
                player_id: player.id,
            }),
            None => Ok(()),
        }
    }

    pub fn start_game(&mut self) -> SessionResult {
        self.require_view(SessionView::Setup)?;
        self.start_readiness().map_err(|e| self.rejected(e))?;

        self.narrator_index = 0;
        self.view = SessionView::Round;
        self.round_input = Some(RoundInput::for_round(&self.roster, self.narrator_index));

        let narrator_id = self.roster[self.narrator_index].id;
        info!(
            "Game started with {} players, first narrator {}",
            self.roster.len(),
            narrator_id
        );

        Ok(SessionEvent::GameStarted {
            players: self.roster.clone(),
            narrator_id,
        })
    }

    // Round

    /// Upper bound on votes a single card can draw: everyone except the
    /// narrator and the card's owner.
    pub fn max_votes(&self) -> u32 {
        self.roster.len().saturating_sub(2) as u32
    }

    fn round_entry_mut(&mut self, player_id: PlayerId) -> Result<&mut PlayerInput, SessionError> {
        self.require_view(SessionView::Round)?;
        self.position_of(player_id)?;

        let is_narrator = self
            .round_input
            .as_ref()
            .is_some_and(|input| input.narrator_id == player_id);
        if is_narrator {
            return Err(self.rejected(SessionError::NarratorHasNoInput));
        }

        self.round_input
            .as_mut()
            .and_then(|input| input.get_mut(player_id))
            .ok_or(SessionError::PlayerNotFound { player_id })
    }

    pub fn set_guessed(&mut self, player_id: PlayerId, guessed: bool) -> SessionResult {
        let entry = self.round_entry_mut(player_id)?;
        entry.guessed = guessed;
        debug!("Player {} guessed: {}", player_id, guessed);

        Ok(SessionEvent::GuessRecorded { player_id, guessed })
    }

    /// Add `delta` to a player's vote count, clamped to `0..=max_votes()`.
    pub fn adjust_votes(&mut self, player_id: PlayerId, delta: i32) -> SessionResult {
        let max = self.max_votes() as i64;
        let entry = self.round_entry_mut(player_id)?;

        let votes = (entry.votes as i64 + delta as i64).clamp(0, max) as u32;
        entry.votes = votes;
        debug!("Player {} has {} votes", player_id, votes);

        Ok(SessionEvent::VotesChanged { player_id, votes })
    }

    /// Set a player's vote count directly, clamped to `0..=max_votes()`.
    pub fn set_votes(&mut self, player_id: PlayerId, votes: u32) -> SessionResult {
        let max = self.max_votes();
        let entry = self.round_entry_mut(player_id)?;

        let votes = votes.min(max);
        entry.votes = votes;
        debug!("Player {} has {} votes", player_id, votes);

        Ok(SessionEvent::VotesChanged { player_id, votes })
    }

    /// Score the current round, add it to the history, and show the
    /// scoreboard.
    pub fn calculate_score(&mut self) -> SessionResult {
        self.require_view(SessionView::Round)?;
        let input = self
            .round_input
            .take()
            .unwrap_or_else(|| RoundInput::for_round(&self.roster, self.narrator_index));

        let outcome = ScoringEngine::score_round(&self.roster, &input);
        for score in &outcome.scores {
            if let Some(player) = self.roster.iter_mut().find(|p| p.id == score.player_id) {
                player.score += score.points;
            }
        }

        let record = RoundRecord {
            round_number: self.round_number(),
            narrator_id: input.narrator_id,
            branch: outcome.branch,
            scores: outcome.scores,
            recorded_at: chrono::Utc::now().to_rfc3339(),
        };
        info!(
            "Scored round {} ({:?}, {} correct guesses)",
            record.round_number,
            record.branch,
            input.correct_guesses()
        );

        self.history.push(record.clone());
        self.view = SessionView::Scoreboard;

        Ok(SessionEvent::RoundScored { record })
    }

    // Scoreboard

    pub fn next_round(&mut self) -> SessionResult {
        self.require_view(SessionView::Scoreboard)?;

        self.narrator_index = (self.narrator_index + 1) % self.roster.len();
        self.round_input = Some(RoundInput::for_round(&self.roster, self.narrator_index));
        self.view = SessionView::Round;

        let narrator_id = self.roster[self.narrator_index].id;
        info!(
            "Round {} started, narrator {}",
            self.round_number(),
            narrator_id
        );

        Ok(SessionEvent::RoundStarted {
            round_number: self.round_number(),
            narrator_id,
        })
    }

    /// End the session. Everything is discarded and the starting roster is
    /// rebuilt, exactly as on a fresh launch.
    pub fn finish(&mut self) -> SessionResult {
        info!("Session finished after {} rounds", self.history.len());
        Ok(self.reset())
    }

    /// Discard the session and rebuild it from the startup seed. Accepted in
    /// every view.
    pub fn reset(&mut self) -> SessionEvent {
        *self = Self::with_seed(std::mem::take(&mut self.seed));
        debug!("Session reset");
        SessionEvent::SessionReset
    }

    // Read-only projections

    pub fn view(&self) -> SessionView {
        self.view
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == player_id)
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    pub fn narrator_index(&self) -> usize {
        self.narrator_index
    }

    /// The current narrator, once the game has started.
    pub fn narrator(&self) -> Option<&Player> {
        match self.view {
            SessionView::Setup => None,
            SessionView::Round | SessionView::Scoreboard => self.roster.get(self.narrator_index),
        }
    }

    pub fn round_input(&self) -> Option<&RoundInput> {
        self.round_input.as_ref()
    }

    /// Number of the round being played, or the next one to be played.
    pub fn round_number(&self) -> u32 {
        self.history.len() as u32 + 1
    }

    pub fn can_add_player(&self) -> bool {
        self.view == SessionView::Setup && self.roster.len() < MAX_PLAYERS
    }

    /// Palette options for one player's color picker.
    pub fn available_colors(&self, player_id: PlayerId) -> Result<Vec<ColorOption>, SessionError> {
        let current = self
            .player(player_id)
            .ok_or(SessionError::PlayerNotFound { player_id })?
            .color;

        Ok(PlayerColor::ALL
            .into_iter()
            .map(|color| ColorOption {
                color,
                in_use: self
                    .roster
                    .iter()
                    .any(|p| p.id != player_id && p.color == color),
                selected: color == current,
            })
            .collect())
    }

    /// Players ranked by descending score. Equal scores keep roster (turn)
    /// order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut ranked: Vec<(usize, &Player)> = self.roster.iter().enumerate().collect();
        ranked.sort_by(|(ia, a), (ib, b)| b.score.cmp(&a.score).then(ia.cmp(ib)));

        ranked
            .into_iter()
            .enumerate()
            .map(|(position, (_, player))| Standing {
                rank: position as u32 + 1,
                player: player.clone(),
            })
            .collect()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            view: self.view,
            round_number: self.round_number(),
            roster: self.roster.clone(),
            narrator_id: self.narrator().map(|p| p.id),
            round_input: self.round_input.clone(),
            last_round: self.last_round().cloned(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
