//! Core engine for chess opening repertoires.
//!
//! A repertoire is a prefix-closed set of "lines" (move sequences):
//! holding a line means also holding every position along the way. This
//! crate provides the notation validator, the validated move-sequence
//! container, and the line-space types built on top of it. Everything
//! is synchronous and in-memory; persistence and PGN import live in
//! sibling crates.

pub mod line_space;
pub mod notation;
pub mod sequence;
pub mod unique;

pub use line_space::LineSpace;
pub use notation::{is_valid_move, is_valid_move_logged};
pub use sequence::MoveSequence;
pub use unique::UniqueLineSpace;
