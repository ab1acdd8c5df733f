use dixit_core::Session;
use dixit_types::{ColorOption, Player, SessionError, SessionView, MAX_PLAYERS, MIN_PLAYERS};

use crate::localization::Localizer;

fn player_label<'a>(player: &'a Player, t: &'a Localizer) -> &'a str {
    if player.has_name() {
        &player.name
    } else {
        t.lookup("namePlaceholder")
    }
}

fn header(title: &str) -> String {
    format!("== {} ==", title)
}

/// Render whichever view the session is in.
pub fn render(session: &Session, t: &Localizer) -> String {
    let mut lines = vec![format!("{}  (lang -> {})", t.lookup("appTitle"), t.lookup("langName"))];

    lines.extend(match session.view() {
        SessionView::Setup => render_setup(session, t),
        SessionView::Round => render_round(session, t),
        SessionView::Scoreboard => render_scoreboard(session, t),
    });

    lines.join("\n")
}

/// Start button text, with the reason appended while the game cannot start.
pub fn start_label(session: &Session, t: &Localizer) -> String {
    let label = t.lookup("startGame");
    match session.start_readiness() {
        Ok(()) => label.to_string(),
        Err(SessionError::InvalidPlayerCount { count }) => {
            format!("{} ({}/{}-{})", label, count, MIN_PLAYERS, MAX_PLAYERS)
        }
        Err(_) => format!("{} ({}?)", label, t.lookup("playerName")),
    }
}

fn render_setup(session: &Session, t: &Localizer) -> Vec<String> {
    let mut lines = vec![header(t.lookup("setupTitle"))];

    for (seat, player) in session.roster().iter().enumerate() {
        lines.push(format!(
            "{:>2}. {:<24} [{}]",
            seat + 1,
            player_label(player, t),
            t.color_name(player.color)
        ));
    }

    if session.can_add_player() {
        lines.push(format!("  + {}", t.lookup("addPlayer")));
    }
    lines.push(format!("  > {}", start_label(session, t)));
    lines
}

fn render_round(session: &Session, t: &Localizer) -> Vec<String> {
    let mut lines = vec![format!("{} {}", t.lookup("round"), session.round_number())];

    let narrator = session.narrator();
    if let Some(narrator) = narrator {
        lines.push(format!("{}: {}", t.lookup("narrator"), narrator.name));
    }
    lines.push(header(t.lookup("voting")));

    let input = session.round_input();
    for (seat, player) in session.roster().iter().enumerate() {
        match input.and_then(|i| i.get(player.id)) {
            Some(entry) => lines.push(format!(
                "{:>2}. {:<16} [{}] {}  {}: {}",
                seat + 1,
                player.name,
                if entry.guessed { 'x' } else { ' ' },
                t.lookup("guessedNarrator"),
                t.lookup("votesReceived"),
                entry.votes
            )),
            None => lines.push(format!(
                "{:>2}. {:<16} ({})",
                seat + 1,
                player.name,
                t.lookup("narrator")
            )),
        }
    }

    lines.push(format!("  > {}", t.lookup("calcScore")));
    lines
}

fn render_scoreboard(session: &Session, t: &Localizer) -> Vec<String> {
    let mut lines = vec![header(t.lookup("totalPoints"))];
    let last_round = session.last_round();

    for standing in session.standings() {
        let gained = last_round
            .and_then(|r| r.points_for(standing.player.id))
            .map(|points| format!("(+{})", points))
            .unwrap_or_default();
        lines.push(format!(
            "{:>2}. {:<16} {:>3}  {}",
            standing.rank, standing.player.name, standing.player.score, gained
        ));
    }

    if let Some(record) = last_round {
        lines.push(format!(
            "{}: {} {}",
            t.lookup("roundSummary"),
            t.lookup("round"),
            record.round_number
        ));
    }
    lines.push(format!("  > {}", t.lookup("nextRound")));
    lines.push(format!("  > {}", t.lookup("finishGame")));
    lines
}

/// The color picker for one player. Taken colors are listed but marked.
pub fn render_color_picker(options: &[ColorOption], t: &Localizer) -> String {
    let mut lines = vec![header(t.lookup("pickColor"))];

    for option in options {
        let marker = if option.selected {
            "*"
        } else if option.in_use {
            "-"
        } else {
            " "
        };
        let suffix = if option.in_use {
            format!(" ({})", t.lookup("inUse"))
        } else {
            String::new()
        };
        lines.push(format!(
            " {} {:<8} {}{}",
            marker,
            option.color.key(),
            t.color_name(option.color),
            suffix
        ));
    }

    lines.join("\n")
}

/// User-facing text for a refused action.
pub fn describe_error(error: &SessionError, t: &Localizer) -> String {
    let key = match error {
        SessionError::InvalidPlayerCount { .. } => "errorPlayerCount",
        SessionError::MissingPlayerName { .. } => return format!("{}?", t.lookup("playerName")),
        SessionError::RosterFull => "errorRosterFull",
        SessionError::PlayerNotFound { .. } => "errorPlayerNotFound",
        SessionError::ColorInUse { .. } => "errorColorInUse",
        SessionError::InvalidReorder => "errorReorder",
        SessionError::WrongView { .. } => "errorWrongView",
        SessionError::NarratorHasNoInput => "errorNarratorInput",
    };
    t.lookup(key).to_string()
}
