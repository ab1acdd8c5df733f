use anyhow::{anyhow, bail, Context, Result};
use dixit_types::PlayerColor;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteChange {
    Delta(i32),
    Set(u32),
}

/// One operator instruction. Player positions are 1-based roster seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove(usize),
    Name(usize, String),
    Color(usize, PlayerColor),
    Colors(usize),
    Move(usize, usize),
    Start,
    /// `None` flips the current answer.
    Guess(usize, Option<bool>),
    Vote(usize, VoteChange),
    Score,
    Next,
    Finish,
    Confirm(bool),
    Show,
    Lang,
    Help,
    Quit,
}

fn seat(arg: Option<&str>) -> Result<usize> {
    let raw = arg.ok_or_else(|| anyhow!("missing player number"))?;
    let seat: usize = raw
        .parse()
        .with_context(|| format!("'{}' is not a player number", raw))?;
    if seat == 0 {
        bail!("player numbers start at 1");
    }
    Ok(seat)
}

fn yes_no(word: &str) -> Option<bool> {
    match word.to_lowercase().as_str() {
        "y" | "yes" | "tak" | "true" => Some(true),
        "n" | "no" | "nie" | "false" => Some(false),
        _ => None,
    }
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        let command = match word.to_lowercase().as_str() {
            "add" => Command::Add,
            "remove" | "rm" => Command::Remove(seat(args.next())?),
            "name" => {
                let seat = seat(args.next())?;
                // Everything after the seat number, kept as typed
                let name = rest
                    .split_once(char::is_whitespace)
                    .map(|(_, name)| name)
                    .unwrap_or("");
                Command::Name(seat, name.to_string())
            }
            "color" => {
                let seat = seat(args.next())?;
                let key = args.next().ok_or_else(|| anyhow!("missing color"))?;
                Command::Color(seat, key.parse()?)
            }
            "colors" => Command::Colors(seat(args.next())?),
            "move" => {
                let from = seat(args.next())?;
                let to = seat(args.next()).context("missing target position")?;
                Command::Move(from, to)
            }
            "start" => Command::Start,
            "guess" => {
                let seat = seat(args.next())?;
                let answer = match args.next() {
                    Some(word) => Some(
                        yes_no(word).ok_or_else(|| anyhow!("expected yes or no, got '{}'", word))?,
                    ),
                    None => None,
                };
                Command::Guess(seat, answer)
            }
            "vote" | "votes" => {
                let seat = seat(args.next())?;
                let change = match args.next() {
                    Some("+") => VoteChange::Delta(1),
                    Some("-") => VoteChange::Delta(-1),
                    Some(count) => VoteChange::Set(
                        count
                            .parse()
                            .with_context(|| format!("'{}' is not a vote count", count))?,
                    ),
                    None => bail!("expected +, - or a vote count"),
                };
                Command::Vote(seat, change)
            }
            "score" => Command::Score,
            "next" => Command::Next,
            "finish" => Command::Finish,
            "show" | "" => Command::Show,
            "lang" => Command::Lang,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => match yes_no(other) {
                Some(answer) => Command::Confirm(answer),
                None => bail!("unknown command '{}'", other),
            },
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        line.parse().unwrap()
    }

    #[test]
    fn test_setup_commands() {
        assert_eq!(parse("add"), Command::Add);
        assert_eq!(parse("  remove 2 "), Command::Remove(2));
        assert_eq!(parse("name 1 Anna Maria "), Command::Name(1, "Anna Maria ".to_string()));
        assert_eq!(parse("name 3"), Command::Name(3, String::new()));
        assert_eq!(parse("color 2 Purple"), Command::Color(2, PlayerColor::Purple));
        assert_eq!(parse("move 4 1"), Command::Move(4, 1));
        assert_eq!(parse("START"), Command::Start);
    }

    #[test]
    fn test_round_commands() {
        assert_eq!(parse("guess 2"), Command::Guess(2, None));
        assert_eq!(parse("guess 2 tak"), Command::Guess(2, Some(true)));
        assert_eq!(parse("guess 3 no"), Command::Guess(3, Some(false)));
        assert_eq!(parse("vote 2 +"), Command::Vote(2, VoteChange::Delta(1)));
        assert_eq!(parse("vote 2 -"), Command::Vote(2, VoteChange::Delta(-1)));
        assert_eq!(parse("votes 4 3"), Command::Vote(4, VoteChange::Set(3)));
    }

    #[test]
    fn test_misc_commands() {
        assert_eq!(parse(""), Command::Show);
        assert_eq!(parse("y"), Command::Confirm(true));
        assert_eq!(parse("nie"), Command::Confirm(false));
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn test_rejections() {
        assert!("remove".parse::<Command>().is_err());
        assert!("remove 0".parse::<Command>().is_err());
        assert!("remove x".parse::<Command>().is_err());
        assert!("color 1 teal".parse::<Command>().is_err());
        assert!("guess 1 maybe".parse::<Command>().is_err());
        assert!("vote 1".parse::<Command>().is_err());
        assert!("vote 1 -2x".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
    }
}
