use anyhow::{anyhow, Result};
use dixit_core::{Session, SessionEvent, SessionEventBus, SessionEventHandler, SessionResult};
use dixit_types::PlayerId;
use tracing::info;

use crate::commands::{Command, VoteChange};
use crate::config::Config;
use crate::localization::Localizer;
use crate::render;

/// Logs every accepted session transition.
pub struct TracingEventHandler;

impl SessionEventHandler for TracingEventHandler {
    fn handle_event(&mut self, event: SessionEvent) {
        match &event {
            SessionEvent::GameStarted { players, .. } => {
                info!("Game started with {} players", players.len());
            }
            SessionEvent::RoundScored { record } => {
                info!(
                    "Round {} scored, {} points handed out",
                    record.round_number,
                    record.total_points()
                );
            }
            SessionEvent::SessionReset => info!("Session reset"),
            other => tracing::debug!("Session event: {:?}", other),
        }
    }
}

/// What the terminal loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading commands.
    Show(String),
    Quit,
}

/// The presentation layer: turns operator commands into session calls and
/// session state into text.
pub struct CompanionApp {
    session: Session,
    localizer: Localizer,
    events: SessionEventBus,
    awaiting_finish: bool,
}

impl CompanionApp {
    pub fn new(config: &Config) -> Self {
        let mut events = SessionEventBus::new();
        events.add_handler(Box::new(TracingEventHandler));

        Self {
            session: Session::with_seed(config.roster_seed()),
            localizer: Localizer::new(config.language),
            events,
            awaiting_finish: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn events_mut(&mut self) -> &mut SessionEventBus {
        &mut self.events
    }

    pub fn screen(&self) -> String {
        render::render(&self.session, &self.localizer)
    }

    fn player_at(&self, seat: usize) -> Result<PlayerId> {
        seat.checked_sub(1)
            .and_then(|index| self.session.roster().get(index))
            .map(|p| p.id)
            .ok_or_else(|| anyhow!("{}", self.localizer.lookup("errorPlayerNotFound")))
    }

    /// Publish an accepted transition and redraw, or describe a rejection.
    fn apply(&mut self, result: SessionResult) -> Reply {
        match result {
            Ok(event) => {
                self.events.publish(event);
                Reply::Show(self.screen())
            }
            Err(e) => Reply::Show(render::describe_error(&e, &self.localizer)),
        }
    }

    /// Parse and run one line of input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(command) => match self.execute(command) {
                Ok(reply) => reply,
                Err(e) => Reply::Show(e.to_string()),
            },
            Err(e) => Reply::Show(format!(
                "{} ({:#})",
                self.localizer.lookup("unknownCommand"),
                e
            )),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        // Anything other than a confirmation cancels a pending finish
        let awaiting_finish = std::mem::take(&mut self.awaiting_finish);

        let reply = match command {
            Command::Add => {
                let result = self.session.add_player();
                self.apply(result)
            }
            Command::Remove(seat) => {
                let id = self.player_at(seat)?;
                let result = self.session.remove_player(id);
                self.apply(result)
            }
            Command::Name(seat, name) => {
                let id = self.player_at(seat)?;
                let result = self.session.rename_player(id, name);
                self.apply(result)
            }
            Command::Color(seat, color) => {
                let id = self.player_at(seat)?;
                let result = self.session.recolor_player(id, color);
                self.apply(result)
            }
            Command::Colors(seat) => {
                let id = self.player_at(seat)?;
                let options = self.session.available_colors(id)?;
                Reply::Show(render::render_color_picker(&options, &self.localizer))
            }
            Command::Move(seat, to) => {
                let id = self.player_at(seat)?;
                let result = self.session.move_player(id, to - 1);
                self.apply(result)
            }
            Command::Start => {
                let result = self.session.start_game();
                self.apply(result)
            }
            Command::Guess(seat, answer) => {
                let id = self.player_at(seat)?;
                let current = self
                    .session
                    .round_input()
                    .and_then(|input| input.get(id))
                    .is_some_and(|entry| entry.guessed);
                let result = self.session.set_guessed(id, answer.unwrap_or(!current));
                self.apply(result)
            }
            Command::Vote(seat, change) => {
                let id = self.player_at(seat)?;
                let result = match change {
                    VoteChange::Delta(delta) => self.session.adjust_votes(id, delta),
                    VoteChange::Set(votes) => self.session.set_votes(id, votes),
                };
                self.apply(result)
            }
            Command::Score => {
                let result = self.session.calculate_score();
                self.apply(result)
            }
            Command::Next => {
                let result = self.session.next_round();
                self.apply(result)
            }
            Command::Finish => {
                self.awaiting_finish = true;
                Reply::Show(format!(
                    "{}? ({}/{})",
                    self.localizer.lookup("finishGame"),
                    self.localizer.lookup("yes"),
                    self.localizer.lookup("no")
                ))
            }
            Command::Confirm(true) if awaiting_finish => {
                let result = self.session.finish();
                self.apply(result)
            }
            Command::Confirm(_) => Reply::Show(self.screen()),
            Command::Show => Reply::Show(self.screen()),
            Command::Lang => {
                self.localizer.toggle();
                info!("Language switched to {}", self.localizer.language());
                Reply::Show(self.screen())
            }
            Command::Help => Reply::Show(self.localizer.lookup("help").to_string()),
            Command::Quit => Reply::Quit,
        };

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::Language;

    fn english_app(players: &str) -> CompanionApp {
        let config = Config {
            language: Language::En,
            players: Some(players.to_string()),
            colors: None,
        };
        CompanionApp::new(&config)
    }

    #[test]
    fn test_finish_needs_confirmation() {
        let mut app = english_app("Ala,Bartek,Celina,Darek");
        app.handle_line("start");
        app.handle_line("score");

        assert_eq!(
            app.handle_line("finish"),
            Reply::Show("Finish Game? (yes/no)".to_string())
        );
        app.handle_line("no");
        assert_eq!(app.session().history().len(), 1);

        app.handle_line("finish");
        app.handle_line("show");
        app.handle_line("yes");
        assert_eq!(app.session().history().len(), 1);

        app.handle_line("finish");
        app.handle_line("yes");
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_guess_toggles_without_answer() {
        let mut app = english_app("Ala,Bartek,Celina,Darek");
        app.handle_line("start");
        let bartek = app.session().roster()[1].id;

        app.handle_line("guess 2");
        assert!(app.session().round_input().unwrap().get(bartek).unwrap().guessed);
        app.handle_line("guess 2");
        assert!(!app.session().round_input().unwrap().get(bartek).unwrap().guessed);
        app.handle_line("guess 2 yes");
        app.handle_line("guess 2 yes");
        assert!(app.session().round_input().unwrap().get(bartek).unwrap().guessed);
    }

    #[test]
    fn test_bad_seat_reported() {
        let mut app = english_app("Ala");
        assert_eq!(
            app.handle_line("remove 4"),
            Reply::Show("No such player.".to_string())
        );
        assert_eq!(app.session().roster().len(), 1);
    }

    #[test]
    fn test_rejection_is_localized() {
        let mut app = english_app("Ala,Bartek");
        assert_eq!(
            app.handle_line("start"),
            Reply::Show("Need 4-6 players to start.".to_string())
        );
        app.handle_line("lang");
        assert_eq!(
            app.handle_line("start"),
            Reply::Show("Wymagane 4-6 graczy.".to_string())
        );
    }

    #[test]
    fn test_quit() {
        let mut app = english_app("Ala");
        assert_eq!(app.handle_line("quit"), Reply::Quit);
    }
}
