//! Line-oriented text protocol.
//!
//! One command per line; replies go to the given writer. `go` searches the
//! position and plays the engine's move for the side to move, replying
//! `bestmove <coord>` (`bestmove 0000` when there is none).

use std::fmt;
use std::io::{self, BufRead, Write};

use log::info;

use crate::board::{FenError, GameState, MoveParseError, Searcher, SquareError};
use crate::controller::{Commit, GameController};

pub mod command;

pub use command::{parse_command, Command, StartPosition};

/// A command that could not be parsed or carried out
#[derive(Debug)]
pub enum CommandError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidLevel(String),
    InvalidSquare(SquareError),
    InvalidFen(FenError),
    InvalidMove {
        move_str: String,
        error: MoveParseError,
    },
    NothingToUndo,
    /// The search thread could not be started
    Io(io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand(c) => write!(f, "Unknown command '{c}'"),
            CommandError::MissingArgument(what) => write!(f, "Missing argument: {what}"),
            CommandError::InvalidLevel(text) => write!(f, "Invalid level '{text}'"),
            CommandError::InvalidSquare(e) => write!(f, "{e}"),
            CommandError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            CommandError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            CommandError::NothingToUndo => write!(f, "No move to undo"),
            CommandError::Io(e) => write!(f, "Search failed to start: {e}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidSquare(e) => Some(e),
            CommandError::InvalidFen(e) => Some(e),
            CommandError::InvalidMove { error, .. } => Some(error),
            CommandError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FenError> for CommandError {
    fn from(e: FenError) -> Self {
        CommandError::InvalidFen(e)
    }
}

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Protocol state: one game controller.
#[derive(Default)]
pub struct Session {
    controller: GameController,
}

impl Session {
    #[must_use]
    pub fn new(controller: GameController) -> Self {
        Session { controller }
    }

    /// A session searching a fixed number of plies
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        Session::new(GameController::with_searcher(Searcher::with_depth(depth)))
    }

    #[must_use]
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Parse and run one line; errors are reported on `out` as `error: ...`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let result = parse_command(line).and_then(|cmd| match cmd {
            Some(cmd) => self.execute(cmd, out),
            None => Ok(Flow::Continue),
        });
        match result {
            Ok(flow) => Ok(flow),
            Err(CommandError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Err(e),
            Err(e) => {
                writeln!(out, "error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, CommandError> {
        match command {
            Command::NewGame => self.controller.new_game(),
            Command::Position { start, moves } => {
                let state = build_position(&start, &moves)?;
                self.controller.set_position(state);
            }
            Command::Move(text) => {
                let mv = self
                    .controller
                    .play(&text)
                    .map_err(|error| CommandError::InvalidMove {
                        move_str: text.clone(),
                        error,
                    })?;
                let notation = self.last_notation().unwrap_or_else(|| mv.to_string());
                writeln!(out, "played {notation}").map_err(CommandError::Io)?;
            }
            Command::Undo => {
                let record = self.controller.undo().ok_or(CommandError::NothingToUndo)?;
                writeln!(out, "undone {}", record.as_move()).map_err(CommandError::Io)?;
            }
            Command::Go => {
                let reply = match self.controller.think().map_err(CommandError::Io)? {
                    Commit::Played(mv) => mv.to_string(),
                    Commit::Stale | Commit::NoMove => "0000".to_string(),
                };
                writeln!(out, "bestmove {reply}").map_err(CommandError::Io)?;
            }
            Command::Level(difficulty) => self.controller.set_difficulty(difficulty),
            Command::Fen => {
                let fen = self.controller.with_game(GameState::export_position);
                writeln!(out, "{fen}").map_err(CommandError::Io)?;
            }
            Command::Legal(square) => {
                let moves: Vec<String> = self.controller.with_game(|game| match square {
                    Some(sq) => game
                        .legal_moves(sq)
                        .iter()
                        .map(|d| format!("{sq}{}", d.to))
                        .collect(),
                    None => game.all_legal_moves().iter().map(ToString::to_string).collect(),
                });
                writeln!(out, "legal {}", moves.join(" ")).map_err(CommandError::Io)?;
            }
            Command::History => {
                let line = self.controller.with_game(|game| {
                    game.history_notation()
                        .chunks(2)
                        .enumerate()
                        .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
                        .collect::<Vec<_>>()
                        .join(" ")
                });
                writeln!(out, "history {line}").map_err(CommandError::Io)?;
            }
            Command::Status => {
                let line = self.controller.with_game(status_line);
                writeln!(out, "status {line}").map_err(CommandError::Io)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        out.flush().map_err(CommandError::Io)?;
        Ok(Flow::Continue)
    }

    fn last_notation(&self) -> Option<String> {
        self.controller
            .with_game(|game| game.last_move().map(|r| game.render_move_notation(r)))
    }
}

/// Build a game from a start position and a list of coordinate moves.
/// Nothing is returned unless every move applies.
fn build_position(start: &StartPosition, moves: &[String]) -> Result<GameState, CommandError> {
    let mut state = match start {
        StartPosition::Standard => GameState::new(),
        StartPosition::Fen(fen) => GameState::try_from_fen(fen)?,
    };
    for text in moves {
        state
            .apply_coordinate_move(text)
            .map_err(|error| CommandError::InvalidMove {
                move_str: text.clone(),
                error,
            })?;
    }
    Ok(state)
}

/// "<side> to move", or the game result
fn status_line(game: &GameState) -> String {
    let side = game.current_player();
    if game.is_checkmate() {
        format!("checkmate {} wins", side.opponent())
    } else if game.is_stalemate() {
        "stalemate".to_string()
    } else if game.is_check() {
        format!("{side} to move, in check")
    } else {
        format!("{side} to move")
    }
}

/// Read commands from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W) -> io::Result<()> {
    let mut session = Session::default();
    info!("session started, difficulty {}", session.controller.difficulty().level());
    for line in input.lines() {
        if session.handle_line(&line?, &mut out)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Run the protocol on standard input and output.
pub fn run_stdio() -> io::Result<()> {
    let stdin = io::stdin();
    run(stdin.lock(), io::stdout().lock())
}
