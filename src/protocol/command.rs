//! Driver message parsing.

use std::time::Duration;

use super::ProtocolError;
use crate::board::{Color, Move};

/// Messages the game server sends to a player.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `Connected to the server!`
    Connected,
    /// `Color W` / `Color B`
    Color(Color),
    /// `Setup Wa2 ... Bh7`, kept whole for the board parser
    Setup(String),
    /// A bare number: total game time in minutes
    GameTime(Duration),
    Begin,
    YourTurn,
    /// `TimeRemaining <seconds>`
    TimeRemaining(Duration),
    /// The opponent's move in four-character notation
    OpponentMove(Move),
    Exit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Result<Option<Command>, ProtocolError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match parts[0] {
        "Connected" => Command::Connected,
        "Color" => {
            let found = parts.get(1).copied().unwrap_or_default();
            let mut chars = found.chars();
            match (chars.next().and_then(Color::from_char), chars.next()) {
                (Some(color), None) => Command::Color(color),
                _ => {
                    return Err(ProtocolError::InvalidColor {
                        found: found.to_string(),
                    })
                }
            }
        }
        "Setup" => Command::Setup(trimmed.to_string()),
        "Begin" => Command::Begin,
        "Your" if parts.get(1) == Some(&"turn") => Command::YourTurn,
        "TimeRemaining" => {
            let value = parts.get(1).copied().unwrap_or_default();
            let seconds = value
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite() && *s >= 0.0)
                .ok_or_else(|| ProtocolError::InvalidTime {
                    found: value.to_string(),
                })?;
            Command::TimeRemaining(Duration::from_secs_f64(seconds))
        }
        "exit" => Command::Exit,
        word if word.chars().all(|c| c.is_ascii_digit()) => {
            let minutes = word.parse::<u64>().map_err(|_| ProtocolError::InvalidTime {
                found: word.to_string(),
            })?;
            Command::GameTime(Duration::from_secs(minutes.saturating_mul(60)))
        }
        word if word.len() == 4 && parts.len() == 1 => Command::OpponentMove(word.parse()?),
        _ => Command::Unknown(trimmed.to_string()),
    };

    Ok(Some(cmd))
}
