//! PGN game-record import.
//!
//! Turns raw Chess.com-style PGN text into [`GameRecord`]s oriented to
//! a named player: header fields (date, Elo, termination) come from
//! regex tag-pair extraction, while the movetext goes through
//! `repertoire_core::MoveSequence`, whose validator filter drops move
//! numbers and result markers.

pub mod pgn;
pub mod record;

pub use record::{GameRecord, ImportError, Termination};
