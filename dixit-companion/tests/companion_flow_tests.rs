mod test_helpers;

use dixit_core::SessionEvent;
use dixit_types::{PlayerColor, SessionView};
use test_helpers::*;

#[test]
fn test_manual_setup_to_first_round() {
    let mut app = create_app(None, None);
    let screen = run_script(
        &mut app,
        &[
            "name 1 Ala",
            "add",
            "name 2 Bartek",
            "add",
            "name 3 Celina",
            "add",
        ],
    );
    assert!(screen.contains("Start Game (Player Name?)"));

    let screen = run_script(&mut app, &["name 4 Darek", "color 4 red"]);
    assert!(screen.contains("> Start Game\n") || screen.ends_with("> Start Game"));
    assert_eq!(app.session().roster()[3].color, PlayerColor::Red);

    let screen = run_script(&mut app, &["start"]);
    assert_eq!(app.session().view(), SessionView::Round);
    assert!(screen.contains("Narrator: Ala"));
}

#[test]
fn test_seeded_game_plays_two_rounds() {
    let mut app = create_app(Some("Ala,Bartek,Celina,Darek"), Some("blue"));
    assert_eq!(app.session().roster()[0].color, PlayerColor::Blue);

    run_script(
        &mut app,
        &["start", "guess 2 yes", "vote 2 +", "vote 4 2", "score"],
    );
    assert_eq!(scores(&app), vec![3, 4, 0, 2]);

    let screen = run_script(&mut app, &["next", "guess 1", "guess 3", "guess 4", "score"]);
    // Everyone found Bartek's card
    assert_eq!(scores(&app), vec![5, 4, 2, 4]);
    assert!(screen.contains("Round Summary: Round 2"));
}

#[test]
fn test_reorder_changes_first_narrator() {
    let mut app = create_app(Some("Ala,Bartek,Celina,Darek"), None);
    let screen = run_script(&mut app, &["move 3 1", "start"]);
    assert!(screen.contains("Narrator: Celina"));
}

#[test]
fn test_color_taken_is_refused() {
    let mut app = create_app(Some("Ala,Bartek"), None);
    let reply = run_script(&mut app, &["color 1 yellow"]);
    assert_eq!(reply, "That color is already taken.");

    let picker = run_script(&mut app, &["colors 1"]);
    assert!(picker.contains("Pick Color"));
}

#[test]
fn test_events_reach_extra_handlers() {
    let mut app = create_app(Some("Ala,Bartek,Celina,Darek"), None);
    let collector = EventCollector::new();
    app.events_mut().add_handler(Box::new(collector.clone()));

    run_script(&mut app, &["start", "vote 3 +", "score", "finish", "yes"]);

    let events = collector.get_events();
    assert!(matches!(events.first(), Some(SessionEvent::GameStarted { .. })));
    assert!(matches!(events.last(), Some(SessionEvent::SessionReset)));
    assert_eq!(events.len(), 4);
    assert_eq!(app.session().view(), SessionView::Setup);
}

#[test]
fn test_unknown_command_keeps_state() {
    let mut app = create_app(Some("Ala,Bartek,Celina,Darek"), None);
    let reply = run_script(&mut app, &["juggle"]);
    assert!(reply.starts_with("Unknown command."));
    assert_eq!(app.session().view(), SessionView::Setup);
}
