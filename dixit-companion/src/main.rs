use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dixit_companion::{
    app::{CompanionApp, Reply},
    config::Config,
    localization::Language,
};

#[derive(Parser)]
#[command(name = "dixit-companion")]
#[command(about = "Scorekeeping companion for Dixit")]
struct Cli {
    /// Interface language (overrides DIXIT_LANG)
    #[arg(long, value_enum)]
    lang: Option<Language>,

    /// Comma-separated player names to start with (overrides DIXIT_PLAYERS)
    #[arg(long)]
    with_players: Option<String>,

    /// Comma-separated colors matching --with-players (overrides DIXIT_COLORS)
    #[arg(long)]
    with_colors: Option<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the rendered screen
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.lang, cli.with_players, cli.with_colors);
    info!("Starting Dixit companion ({})", config.language);

    let mut app = CompanionApp::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", app.screen())?;
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read command")?;
        if read == 0 {
            break;
        }

        match app.handle_line(&line) {
            Reply::Show(text) => writeln!(stdout, "{}", text)?,
            Reply::Quit => break,
        }
    }

    info!("Companion closed");
    Ok(())
}
