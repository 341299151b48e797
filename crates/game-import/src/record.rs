//! Whole-game records parsed from PGN, oriented to a named player.

use chrono::NaiveDate;
use repertoire_core::MoveSequence;
use serde::{Deserialize, Serialize};

use crate::pgn;

/// How a game ended, classified from the Chess.com `Termination`
/// phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Termination {
    Checkmate,
    Resignation,
    Time,
    Draw,
}

impl Termination {
    /// "drawn" takes precedence over "time" over "checkmate"; anything
    /// else counts as a resignation.
    fn from_phrase(phrase: &str) -> Self {
        if phrase.contains("drawn") {
            Termination::Draw
        } else if phrase.contains("time") {
            Termination::Time
        } else if phrase.contains("checkmate") {
            Termination::Checkmate
        } else {
            Termination::Resignation
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("missing PGN header: {0}")]
    MissingHeader(String),

    #[error("missing or invalid Elo header: {0}")]
    InvalidElo(String),

    #[error("invalid date value: {0}")]
    InvalidDate(String),
}

/// One imported game, seen from the perspective of the player it was
/// imported for.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: MoveSequence,
    pub user_is_white: bool,
    pub user_won: bool,
    pub opponent_elo: u32,
    pub date: NaiveDate,
    pub termination: Termination,
}

impl GameRecord {
    /// Parse a single-game PGN for the given player.
    ///
    /// `username` decides the perspective: the user played white iff
    /// the `White` header equals it, and won iff the termination
    /// phrase names it. Header fields are required; malformed movetext
    /// is never an error — non-move tokens are filtered during
    /// sequence construction.
    pub fn parse(pgn_text: &str, username: &str) -> Result<GameRecord, ImportError> {
        let white = pgn::extract_header(pgn_text, "White")
            .ok_or_else(|| ImportError::MissingHeader("White".to_string()))?;
        let termination = pgn::extract_header(pgn_text, "Termination")
            .ok_or_else(|| ImportError::MissingHeader("Termination".to_string()))?;
        let date_raw = pgn::extract_header(pgn_text, "Date")
            .ok_or_else(|| ImportError::MissingHeader("Date".to_string()))?;

        let user_is_white = white == username;

        // The opponent's rating lives in the header for the side the
        // user did not play.
        let elo_header = if user_is_white { "BlackElo" } else { "WhiteElo" };
        let opponent_elo = pgn::extract_header_int(pgn_text, elo_header)
            .and_then(|elo| u32::try_from(elo).ok())
            .ok_or_else(|| ImportError::InvalidElo(elo_header.to_string()))?;

        let date = NaiveDate::parse_from_str(&date_raw, "%Y.%m.%d")
            .map_err(|_| ImportError::InvalidDate(date_raw.clone()))?;

        let moves = MoveSequence::parse(&pgn::extract_movetext(pgn_text));

        Ok(GameRecord {
            moves,
            user_is_white,
            user_won: termination.contains(username),
            opponent_elo,
            date,
            termination: Termination::from_phrase(&termination),
        })
    }
}
