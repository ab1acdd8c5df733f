use dixit_types::PlayerColor;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Language {
    En,
    #[default]
    Pl,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Pl,
            Language::Pl => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Pl => f.write_str("pl"),
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pl" => Ok(Language::Pl),
            other => Err(anyhow::anyhow!("unsupported language '{}'", other)),
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("appTitle", "Dixit Companion"),
    ("startGame", "Start Game"),
    ("addPlayer", "Add Player"),
    ("remove", "Remove"),
    ("playerName", "Player Name"),
    ("namePlaceholder", "Enter player name..."),
    ("pickColor", "Pick Color"),
    ("setupTitle", "Game Setup"),
    ("roundPoints", "Round Points"),
    ("totalPoints", "Total Score"),
    ("narrator", "Narrator"),
    ("voting", "Voting Results"),
    ("nextRound", "Next Round"),
    ("finishGame", "Finish Game"),
    ("votesReceived", "Votes received on their card (Bluff)"),
    ("calcScore", "Calculate Score"),
    ("round", "Round"),
    ("confirm", "Confirm"),
    ("guessedNarrator", "Narrator guessed?"),
    ("scoreboard", "Scoreboard"),
    ("langName", "Polski"),
    ("errorPlayerCount", "Need 4-6 players to start."),
    ("roundSummary", "Round Summary"),
    ("close", "Close"),
    ("yes", "yes"),
    ("no", "no"),
    ("inUse", "taken"),
    ("errorRosterFull", "The table is full (6 players)."),
    ("errorColorInUse", "That color is already taken."),
    ("errorPlayerNotFound", "No such player."),
    ("errorReorder", "That order does not list every player once."),
    ("errorWrongView", "Not available right now."),
    ("errorNarratorInput", "The narrator does not guess or collect votes."),
    ("unknownCommand", "Unknown command. Type 'help' for the list."),
    (
        "help",
        "Setup:      add | remove <n> | name <n> <text> | color <n> <color> | colors <n> | move <n> <pos> | start\n\
         Round:      guess <n> [yes|no] | vote <n> +|-|<count> | score\n\
         Scoreboard: next | finish\n\
         Always:     show | lang | help | quit",
    ),
];

const PL: &[(&str, &str)] = &[
    ("appTitle", "Dixit Pomocnik"),
    ("startGame", "Rozpocznij Grę"),
    ("addPlayer", "Dodaj Gracza"),
    ("remove", "Usuń"),
    ("playerName", "Imię gracza"),
    ("namePlaceholder", "Wpisz imię gracza..."),
    ("pickColor", "Wybierz Kolor"),
    ("setupTitle", "Przygotowanie"),
    ("roundPoints", "Punkty w rundzie"),
    ("totalPoints", "Wynik całkowity"),
    ("narrator", "Narrator"),
    ("voting", "Wyniki Głosowania"),
    ("nextRound", "Następna Runda"),
    ("finishGame", "Koniec Gry"),
    ("votesReceived", "Głosy na ich kartę (Zmyłka)"),
    ("calcScore", "Oblicz Punkty"),
    ("round", "Runda"),
    ("confirm", "Zatwierdź"),
    ("guessedNarrator", "Narrator odgadnięty?"),
    ("scoreboard", "Tablica Wyników"),
    ("langName", "English"),
    ("errorPlayerCount", "Wymagane 4-6 graczy."),
    ("roundSummary", "Podsumowanie Rundy"),
    ("close", "Zamknij"),
    ("yes", "tak"),
    ("no", "nie"),
    ("inUse", "zajęty"),
    ("errorRosterFull", "Stół jest pełny (6 graczy)."),
    ("errorColorInUse", "Ten kolor jest już zajęty."),
    ("errorPlayerNotFound", "Nie ma takiego gracza."),
    ("errorReorder", "Nowa kolejność musi zawierać każdego gracza raz."),
    ("errorWrongView", "Teraz niedostępne."),
    ("errorNarratorInput", "Narrator nie zgaduje i nie zbiera głosów."),
    ("unknownCommand", "Nieznane polecenie. Wpisz 'help', aby zobaczyć listę."),
    (
        "help",
        "Przygotowanie: add | remove <n> | name <n> <imię> | color <n> <kolor> | colors <n> | move <n> <poz> | start\n\
         Runda:         guess <n> [yes|no] | vote <n> +|-|<liczba> | score\n\
         Wyniki:        next | finish\n\
         Zawsze:        show | lang | help | quit",
    ),
];

/// Label lookup for the active language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn toggle(&mut self) {
        self.language = self.language.toggled();
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self.language {
            Language::En => EN,
            Language::Pl => PL,
        }
    }

    /// Label for `key`, or the key itself when the table has no entry.
    pub fn lookup<'a>(&self, key: &'a str) -> &'a str {
        self.table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
            .unwrap_or(key)
    }

    pub fn color_name(&self, color: PlayerColor) -> &'static str {
        match (self.language, color) {
            (Language::En, PlayerColor::Green) => "Green",
            (Language::En, PlayerColor::Yellow) => "Yellow",
            (Language::En, PlayerColor::Orange) => "Orange",
            (Language::En, PlayerColor::Blue) => "Blue",
            (Language::En, PlayerColor::Purple) => "Purple",
            (Language::En, PlayerColor::Pink) => "Pink",
            (Language::En, PlayerColor::Red) => "Red",
            (Language::Pl, PlayerColor::Green) => "Zielony",
            (Language::Pl, PlayerColor::Yellow) => "Żółty",
            (Language::Pl, PlayerColor::Orange) => "Pomarańczowy",
            (Language::Pl, PlayerColor::Blue) => "Niebieski",
            (Language::Pl, PlayerColor::Purple) => "Fioletowy",
            (Language::Pl, PlayerColor::Pink) => "Różowy",
            (Language::Pl, PlayerColor::Red) => "Czerwony",
        }
    }
}
