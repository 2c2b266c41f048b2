use crate::board::{Difficulty, Square};

use super::CommandError;

/// Where a `position` command starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartPosition {
    Standard,
    Fen(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Position {
        start: StartPosition,
        moves: Vec<String>,
    },
    Move(String),
    Undo,
    Go,
    Level(Difficulty),
    Fen,
    /// Legal moves from one square, or for the whole side to move
    Legal(Option<Square>),
    History,
    Status,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = parts.split_first() else {
        return Ok(None);
    };

    let command = match head {
        "new" => Command::NewGame,
        "position" => parse_position(args)?,
        "move" => {
            let text = args.first().ok_or(CommandError::MissingArgument("move"))?;
            Command::Move((*text).to_string())
        }
        "undo" => Command::Undo,
        "go" => Command::Go,
        "level" => {
            let text = args.first().ok_or(CommandError::MissingArgument("level"))?;
            let level = text
                .parse::<i64>()
                .map_err(|_| CommandError::InvalidLevel((*text).to_string()))?;
            Command::Level(Difficulty::new(level))
        }
        "fen" => Command::Fen,
        "legal" => match args.first() {
            None => Command::Legal(None),
            Some(text) => Command::Legal(Some(text.parse().map_err(CommandError::InvalidSquare)?)),
        },
        "history" => Command::History,
        "status" => Command::Status,
        "quit" => Command::Quit,
        _ => return Err(CommandError::UnknownCommand(head.to_string())),
    };

    Ok(Some(command))
}

/// `position startpos [moves ...]` or `position fen <fields> [moves ...]`
fn parse_position(args: &[&str]) -> Result<Command, CommandError> {
    let (start, rest) = match args.split_first() {
        Some((&"startpos", rest)) => (StartPosition::Standard, rest),
        Some((&"fen", rest)) => {
            let fields = rest.iter().take_while(|t| **t != "moves").count();
            if fields < 4 {
                return Err(CommandError::MissingArgument("fen"));
            }
            let (fen, rest) = rest.split_at(fields);
            (StartPosition::Fen(fen.join(" ")), rest)
        }
        _ => return Err(CommandError::MissingArgument("startpos or fen")),
    };

    let moves = match rest.split_first() {
        None => Vec::new(),
        Some((&"moves", list)) => list.iter().map(|m| (*m).to_string()).collect(),
        Some((other, _)) => return Err(CommandError::UnknownCommand((*other).to_string())),
    };

    Ok(Command::Position { start, moves })
}
