#![allow(dead_code)]

use dixit_core::{RosterSeed, Session, SessionEvent, SessionEventHandler};
use dixit_types::{Player, PlayerId, SessionView};
use std::sync::{Arc, Mutex};

pub const NAMES: [&str; 6] = ["Ala", "Bartek", "Celina", "Darek", "Ewa", "Filip"];

/// Creates a setup-view session holding the first `player_count` test names
pub fn create_named_session(player_count: usize) -> Session {
    let names = NAMES[..player_count].join(",");
    Session::with_seed(RosterSeed::parse(&names, None))
}

/// Creates a session that has already started its first round
pub fn create_started_session(player_count: usize) -> Session {
    let mut session = create_named_session(player_count);
    session.start_game().expect("test roster should be startable");
    session
}

pub fn player_ids(session: &Session) -> Vec<PlayerId> {
    session.roster().iter().map(|p| p.id).collect()
}

/// Helper to get player by name
pub fn get_player_by_name<'a>(session: &'a Session, name: &str) -> Option<&'a Player> {
    session.roster().iter().find(|p| p.name == name)
}

pub fn id_of(session: &Session, name: &str) -> PlayerId {
    get_player_by_name(session, name)
        .unwrap_or_else(|| panic!("no player named {}", name))
        .id
}

pub fn scores(session: &Session) -> Vec<i32> {
    session.roster().iter().map(|p| p.score).collect()
}

/// Plays one full round: records guesses and votes for the named players,
/// scores it, and returns the points each roster player earned.
pub fn play_round(session: &mut Session, guessed: &[&str], votes: &[(&str, u32)]) -> Vec<i32> {
    for name in guessed {
        let id = id_of(session, name);
        session.set_guessed(id, true).unwrap();
    }
    for (name, count) in votes {
        let id = id_of(session, name);
        session.set_votes(id, *count).unwrap();
    }

    match session.calculate_score().unwrap() {
        SessionEvent::RoundScored { record } => record.scores.iter().map(|s| s.points).collect(),
        other => panic!("expected RoundScored, got {:?}", other),
    }
}

/// Asserts that a session is in a specific view
pub fn assert_view(session: &Session, expected: SessionView) {
    assert_eq!(
        session.view(),
        expected,
        "Expected view {:?}, got {:?}",
        expected,
        session.view()
    );
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&SessionEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl SessionEventHandler for EventCollector {
    fn handle_event(&mut self, event: SessionEvent) {
        self.events.lock().unwrap().push(event);
    }
}
