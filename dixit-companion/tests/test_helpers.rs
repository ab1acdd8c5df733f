#![allow(dead_code)]

use dixit_companion::app::{CompanionApp, Reply};
use dixit_companion::config::Config;
use dixit_companion::localization::Language;
use dixit_core::{SessionEvent, SessionEventHandler};
use std::sync::{Arc, Mutex};

pub fn create_app(players: Option<&str>, colors: Option<&str>) -> CompanionApp {
    let config = Config {
        language: Language::En,
        players: players.map(str::to_string),
        colors: colors.map(str::to_string),
    };
    CompanionApp::new(&config)
}

/// Runs each line in order and returns the text of the last reply
pub fn run_script(app: &mut CompanionApp, lines: &[&str]) -> String {
    let mut last = String::new();
    for line in lines {
        match app.handle_line(line) {
            Reply::Show(text) => last = text,
            Reply::Quit => panic!("script quit early at '{}'", line),
        }
    }
    last
}

pub fn scores(app: &CompanionApp) -> Vec<i32> {
    app.session().roster().iter().map(|p| p.score).collect()
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
}

impl SessionEventHandler for EventCollector {
    fn handle_event(&mut self, event: SessionEvent) {
        self.events.lock().unwrap().push(event);
    }
}
