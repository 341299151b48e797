//! Ordered move sequences with shape-validated elements.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::notation::{is_valid_move, is_valid_move_logged};

/// An ordered list of SAN move tokens, one per ply (index 0 is white's
/// first move).
///
/// Every stored element satisfies [`is_valid_move`]; the tokenizing
/// constructors silently drop anything that doesn't, which is how PGN
/// noise (move numbers, result markers) is filtered out. Equality and
/// hashing are structural, so sequences can key sets and maps — a
/// sequence already used as a key must not be mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSequence {
    moves: Vec<String>,
}

impl MoveSequence {
    /// An empty sequence with its own backing storage.
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Tokenize raw text on commas, spaces, newlines and carriage
    /// returns, keeping only tokens that pass the validator.
    ///
    /// Dropping a non-move token is not an error: this is the intended
    /// ingestion path for unformatted PGN movetext, where `"1."` and
    /// `"1-0"` simply fall out.
    pub fn parse(raw: &str) -> Self {
        let moves = raw
            .split([',', ' ', '\n', '\r'])
            .filter(|token| is_valid_move(token))
            .map(str::to_string)
            .collect();
        Self { moves }
    }

    /// Parse several raw inputs, in order, into one sequence.
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seq = Self::new();
        for source in sources {
            seq.moves.append(&mut Self::parse(source.as_ref()).moves);
        }
        seq
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The move at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        let mv = self.moves.get(index)?;
        // Internal consistency check; stored moves were validated on
        // the way in.
        debug_assert!(is_valid_move(mv), "stored move failed validation: {mv}");
        Some(mv)
    }

    /// A new sequence holding the moves in `range`. Out-of-range
    /// bounds clamp to the sequence length.
    pub fn slice(&self, range: Range<usize>) -> MoveSequence {
        let start = range.start.min(self.moves.len());
        let end = range.end.clamp(start, self.moves.len());
        MoveSequence {
            moves: self.moves[start..end].to_vec(),
        }
    }

    /// Replace the move at `index`. Warns and leaves the sequence
    /// unchanged if the value fails validation or the index is out of
    /// range.
    pub fn set(&mut self, index: usize, value: &str) -> bool {
        if !is_valid_move_logged(value) {
            return false;
        }
        match self.moves.get_mut(index) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => {
                tracing::warn!("move index {} out of range (len {})", index, self.moves.len());
                false
            }
        }
    }

    /// Remove and return the move at `index`. Deletion needs no
    /// validation.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.moves.len() {
            Some(self.moves.remove(index))
        } else {
            None
        }
    }

    /// Drop every move past the first `len`.
    pub fn truncate(&mut self, len: usize) {
        self.moves.truncate(len);
    }

    /// Insert a move at `index`, shifting later moves toward the end.
    /// Warns and leaves the sequence unchanged on an invalid value or
    /// index.
    pub fn insert(&mut self, index: usize, value: &str) -> bool {
        if !is_valid_move_logged(value) {
            return false;
        }
        if index > self.moves.len() {
            tracing::warn!("insert index {} out of range (len {})", index, self.moves.len());
            return false;
        }
        self.moves.insert(index, value.to_string());
        true
    }

    /// Append moves in order, validating each one. The call stops at
    /// the first invalid move: moves appended earlier in the same call
    /// stay appended, the invalid move and everything after it are
    /// dropped. Returns how many moves were appended.
    pub fn append<I, S>(&mut self, moves: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut appended = 0;
        for mv in moves {
            let mv = mv.as_ref();
            if !is_valid_move_logged(mv) {
                break;
            }
            self.moves.push(mv.to_string());
            appended += 1;
        }
        appended
    }

    /// True if this sequence begins with every move of `prefix`.
    pub fn starts_with(&self, prefix: &MoveSequence) -> bool {
        self.moves.len() >= prefix.moves.len()
            && self.moves[..prefix.moves.len()] == prefix.moves[..]
    }

    /// Iterate over the moves in ply order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for MoveSequence {
    /// Builds a sequence from pre-split tokens, filtering invalid ones
    /// like the parsing constructor. Deserialization funnels through
    /// here, so a deserialized sequence cannot hold invalid tokens.
    fn from(tokens: Vec<String>) -> Self {
        Self {
            moves: tokens.into_iter().filter(|t| is_valid_move(t)).collect(),
        }
    }
}

impl From<MoveSequence> for Vec<String> {
    fn from(seq: MoveSequence) -> Vec<String> {
        seq.moves
    }
}

impl FromStr for MoveSequence {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}

impl fmt::Display for MoveSequence {
    /// Renders the sequence as numbered full turns, e.g.
    /// `"1. e4 e5 2. Nf3"`. The black move is omitted on a trailing
    /// odd ply; an empty sequence renders as `"1. "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.moves.is_empty() {
            return write!(f, "1. ");
        }
        let turns: Vec<String> = self
            .moves
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| match pair {
                [white, black] => format!("{}. {} {}", i + 1, white, black),
                [white] => format!("{}. {}", i + 1, white),
                _ => unreachable!("chunks(2) yields one- or two-move windows"),
            })
            .collect();
        write!(f, "{}", turns.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters_pgn_noise() {
        let seq = MoveSequence::parse("1. e4 e5 2. Nf3 Nc6");
        assert_eq!(seq.len(), 4);
        let moves: Vec<&str> = seq.iter().collect();
        assert_eq!(moves, vec!["e4", "e5", "Nf3", "Nc6"]);
    }

    #[test]
    fn test_parse_mixed_delimiters() {
        let a = MoveSequence::parse("1. e4 e5 2. Nf3 Nc6");
        let b = MoveSequence::parse("e4, e5\n Nf3 Nc6");
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_sources_preserves_order() {
        let seq = MoveSequence::from_sources(["e4 e5", "Nf3, Nc6", "Bb5"]);
        let moves: Vec<&str> = seq.iter().collect();
        assert_eq!(moves, vec!["e4", "e5", "Nf3", "Nc6", "Bb5"]);
    }

    #[test]
    fn test_get_and_slice() {
        let seq = MoveSequence::parse("e4 e5 Nf3 Nc6");
        assert_eq!(seq.get(2), Some("Nf3"));
        assert_eq!(seq.get(4), None);

        let middle = seq.slice(1..3);
        assert_eq!(middle, MoveSequence::parse("e5 Nf3"));

        // Out-of-range bounds clamp.
        assert_eq!(seq.slice(2..99), MoveSequence::parse("Nf3 Nc6"));
        assert!(seq.slice(7..9).is_empty());
    }

    #[test]
    fn test_set_rejects_invalid_value() {
        let mut seq = MoveSequence::parse("e4 e5");
        assert!(!seq.set(0, "not-a-move"));
        assert_eq!(seq, MoveSequence::parse("e4 e5"));

        assert!(seq.set(0, "d4"));
        assert_eq!(seq, MoveSequence::parse("d4 e5"));
    }

    #[test]
    fn test_remove_needs_no_validation() {
        let mut seq = MoveSequence::parse("e4 e5 Nf3");
        assert_eq!(seq.remove(1), Some("e5".to_string()));
        assert_eq!(seq, MoveSequence::parse("e4 Nf3"));
        assert_eq!(seq.remove(5), None);
    }

    #[test]
    fn test_insert_rejects_invalid_value() {
        let mut seq = MoveSequence::parse("e4 Nf3");
        assert!(seq.insert(1, "e5"));
        assert_eq!(seq, MoveSequence::parse("e4 e5 Nf3"));

        assert!(!seq.insert(0, "??"));
        assert!(!seq.insert(9, "d4"));
        assert_eq!(seq, MoveSequence::parse("e4 e5 Nf3"));
    }

    // Batch append keeps earlier moves from the same call when a later
    // one is invalid; the rest of the batch is dropped.
    #[test]
    fn test_append_partial_application() {
        let mut seq = MoveSequence::parse("e4");
        let appended = seq.append(["e5", "Nf3", "bogus", "Nc6"]);
        assert_eq!(appended, 2);
        assert_eq!(seq, MoveSequence::parse("e4 e5 Nf3"));
    }

    #[test]
    fn test_equality_is_structural() {
        let a = MoveSequence::parse("e4 e5");
        let b = MoveSequence::from_sources(["e4", "e5"]);
        assert_eq!(a, b);
        assert_ne!(a, MoveSequence::parse("e4 e5 Nf3"));
        assert_ne!(a, MoveSequence::parse("d4 e5"));
    }

    #[test]
    fn test_hash_follows_equality() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(MoveSequence::parse("e4 e5"));
        assert!(set.contains(&MoveSequence::parse("e4, e5")));
        assert!(!set.contains(&MoveSequence::parse("e4")));
    }

    #[test]
    fn test_render_even_and_odd_length() {
        assert_eq!(
            MoveSequence::parse("e4 e5 Nf3 Nc6").to_string(),
            "1. e4 e5 2. Nf3 Nc6"
        );
        assert_eq!(MoveSequence::parse("e4 e5 Nf3").to_string(), "1. e4 e5 2. Nf3");
        assert_eq!(MoveSequence::new().to_string(), "1. ");
    }

    #[test]
    fn test_render_parse_round_trip() {
        for raw in ["e4", "e4 e5", "g4 e5 Bg2 Bb4 Nc3 Nf6 a3 Ba5 g5 Ng4"] {
            let seq = MoveSequence::parse(raw);
            assert_eq!(MoveSequence::parse(&seq.to_string()), seq);
        }
        // The empty rendering round-trips too: "1. " parses to nothing.
        let empty = MoveSequence::new();
        assert_eq!(MoveSequence::parse(&empty.to_string()), empty);
    }

    #[test]
    fn test_deserialize_filters_invalid_tokens() {
        let seq: MoveSequence = serde_json::from_str(r#"["e4", "1.", "e5"]"#).unwrap();
        assert_eq!(seq, MoveSequence::parse("e4 e5"));
    }

    #[test]
    fn test_serialize_as_token_list() {
        let seq = MoveSequence::parse("e4 e5");
        assert_eq!(serde_json::to_string(&seq).unwrap(), r#"["e4","e5"]"#);
    }

    #[test]
    fn test_from_str_matches_parse() {
        let seq: MoveSequence = "1. e4 e5 2. Nf3".parse().unwrap();
        assert_eq!(seq, MoveSequence::parse("e4 e5 Nf3"));
    }
}
