use dixit_types::{Player, PlayerColor, PlayerId, RoundRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    PlayerAdded {
        player: Player,
    },
    PlayerRemoved {
        player_id: PlayerId,
        /// Blank player seeded because the roster would otherwise be empty.
        replacement: Option<Player>,
    },
    PlayerRenamed {
        player_id: PlayerId,
        name: String,
    },
    PlayerRecolored {
        player_id: PlayerId,
        color: PlayerColor,
    },
    RosterReordered {
        order: Vec<PlayerId>,
    },
    GameStarted {
        players: Vec<Player>,
        narrator_id: PlayerId,
    },
    GuessRecorded {
        player_id: PlayerId,
        guessed: bool,
    },
    VotesChanged {
        player_id: PlayerId,
        votes: u32,
    },
    RoundScored {
        record: RoundRecord,
    },
    RoundStarted {
        round_number: u32,
        narrator_id: PlayerId,
    },
    SessionReset,
}

impl SessionEvent {
    /// The player an event is about, if it concerns a single player.
    pub fn player_id(&self) -> Option<PlayerId> {
        match self {
            SessionEvent::PlayerAdded { player } => Some(player.id),
            SessionEvent::PlayerRemoved { player_id, .. } => Some(*player_id),
            SessionEvent::PlayerRenamed { player_id, .. } => Some(*player_id),
            SessionEvent::PlayerRecolored { player_id, .. } => Some(*player_id),
            SessionEvent::GuessRecorded { player_id, .. } => Some(*player_id),
            SessionEvent::VotesChanged { player_id, .. } => Some(*player_id),
            SessionEvent::RoundStarted { narrator_id, .. } => Some(*narrator_id),
            SessionEvent::RosterReordered { .. }
            | SessionEvent::GameStarted { .. }
            | SessionEvent::RoundScored { .. }
            | SessionEvent::SessionReset => None,
        }
    }
}

/// Event handler trait for processing session events
pub trait SessionEventHandler {
    fn handle_event(&mut self, event: SessionEvent);
}

/// Simple event bus for distributing session events
pub struct SessionEventBus {
    handlers: Vec<Box<dyn SessionEventHandler>>,
}

impl SessionEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn SessionEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&mut self, event: SessionEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for SessionEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TestHandler {
        events: Rc<RefCell<Vec<SessionEvent>>>,
    }

    impl SessionEventHandler for TestHandler {
        fn handle_event(&mut self, event: SessionEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn test_event_bus_fans_out() {
        let mut bus = SessionEventBus::new();
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        bus.add_handler(Box::new(TestHandler {
            events: first.clone(),
        }));
        bus.add_handler(Box::new(TestHandler {
            events: second.clone(),
        }));
        assert_eq!(bus.handler_count(), 2);

        bus.publish(SessionEvent::SessionReset);

        assert_eq!(first.borrow().as_slice(), &[SessionEvent::SessionReset]);
        assert_eq!(second.borrow().as_slice(), &[SessionEvent::SessionReset]);
    }

    #[test]
    fn test_event_player_id() {
        let player = Player::new("Ala", PlayerColor::Blue);
        let added = SessionEvent::PlayerAdded {
            player: player.clone(),
        };
        assert_eq!(added.player_id(), Some(player.id));
        assert_eq!(SessionEvent::SessionReset.player_id(), None);
    }
}
