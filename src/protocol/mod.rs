//! Line-oriented game server protocol.
//!
//! The server sends one message per line; the player answers `OK` to the
//! handshake messages, answers `Your turn` with its move in four-character
//! notation and silently applies the opponent's moves.
//!
//! ```text
//! > Connected to the server!      < OK
//! > Color W                       < OK
//! > Setup Wa2 Wb2 ... Bh7         < OK
//! > 5                             < OK
//! > Begin
//! > Your turn                     < e2e4
//! > e7e5
//! > exit
//! ```

pub mod command;

use std::io::{BufRead, Write};
use std::time::Duration;

use log::{debug, info, warn};
use thiserror::Error;

use crate::board::{Board, Color, ConfigError, IllegalMove, Move, NotationError, SearchError};
use crate::engine::Engine;

pub use command::{parse_command, Command};

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid color '{found}', expected 'W' or 'B'")]
    InvalidColor { found: String },
    #[error("invalid time value '{found}'")]
    InvalidTime { found: String },
    #[error("asked to move before a color was assigned")]
    NoColor,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    Illegal(#[from] IllegalMove),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// One player's view of a game: the engine, the authoritative board and the
/// clock as reported by the server.
pub struct Session {
    engine: Engine,
    board: Board,
    color: Option<Color>,
    game_active: bool,
    time_remaining: Option<Duration>,
    finished: bool,
}

impl Session {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        let board = engine.new_board();
        Session {
            engine,
            board,
            color: None,
            game_active: false,
            time_remaining: None,
            finished: false,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Clock left for this player, as last reported by the server.
    #[must_use]
    pub fn time_remaining(&self) -> Option<Duration> {
        self.time_remaining
    }

    /// True once `exit` was received.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Handle one server line and return the reply to send, if any.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>, ProtocolError> {
        let Some(cmd) = parse_command(line)? else {
            return Ok(None);
        };
        self.handle_command(cmd)
    }

    pub fn handle_command(&mut self, cmd: Command) -> Result<Option<String>, ProtocolError> {
        match cmd {
            Command::Connected => Ok(Some("OK".to_string())),
            Command::Color(color) => {
                info!("playing {color}");
                self.color = Some(color);
                Ok(Some("OK".to_string()))
            }
            Command::Setup(setup) => match self.board.initialize_custom_board(&setup) {
                Ok(()) => {
                    debug!("board set up:\n{}", self.board);
                    Ok(Some("OK".to_string()))
                }
                Err(e) => {
                    warn!("rejected setup '{setup}': {e}");
                    Ok(Some(format!("ERROR {e}")))
                }
            },
            Command::GameTime(total) => {
                info!("game time {total:?}");
                self.time_remaining = Some(total);
                Ok(Some("OK".to_string()))
            }
            Command::Begin => {
                self.game_active = true;
                self.engine.new_game();
                Ok(None)
            }
            Command::YourTurn => self.play_turn(),
            Command::TimeRemaining(left) => {
                self.time_remaining = Some(left);
                Ok(None)
            }
            Command::OpponentMove(mv) => {
                self.apply_opponent_move(mv)?;
                Ok(None)
            }
            Command::Exit => {
                info!("game over");
                self.finished = true;
                Ok(None)
            }
            Command::Unknown(text) => {
                warn!("ignoring unknown message '{text}'");
                Ok(None)
            }
        }
    }

    fn play_turn(&mut self) -> Result<Option<String>, ProtocolError> {
        if !self.game_active {
            warn!("'Your turn' before 'Begin', ignoring");
            return Ok(None);
        }
        let color = self.color.ok_or(ProtocolError::NoColor)?;
        self.board.set_side_to_move(color);

        let budget = match self.time_remaining {
            Some(left) => self.engine.move_time(left),
            None => self.engine.config().time_limit,
        };
        let max_depth = self.engine.config().max_depth;
        match self.engine.best_move(&mut self.board, max_depth, color, budget) {
            Ok(mv) => {
                self.board.apply_move(mv, color)?;
                Ok(Some(mv.to_string()))
            }
            Err(e @ SearchError::SearchExhausted { .. }) => {
                warn!("{e}");
                Ok(Some(format!("ERROR {e}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn apply_opponent_move(&mut self, mv: Move) -> Result<(), ProtocolError> {
        let color = self.color.ok_or(ProtocolError::NoColor)?.opponent();
        self.board.set_side_to_move(color);
        self.board.apply_move(mv, color)?;
        debug!("opponent played {mv}");
        Ok(())
    }

    /// Serve lines from `input` until `exit` or end of input. Bad messages
    /// are logged and skipped; only I/O failures end the session early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), ProtocolError> {
        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Ok(Some(reply)) => {
                    writeln!(output, "{reply}")?;
                    output.flush()?;
                }
                Ok(None) => {}
                Err(e) => warn!("bad message '{}': {e}", line.trim()),
            }
            if self.finished {
                break;
            }
        }
        Ok(())
    }
}
