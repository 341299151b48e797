//! Prefix-closed sets of repertoire lines.

use std::collections::HashSet;

use crate::sequence::MoveSequence;

/// A set of move sequences closed under taking prefixes: for any
/// stored line, every prefix of it (down to the empty sequence) is
/// also stored. `is_white` records whose repertoire this is and drives
/// turn parity.
///
/// Sequences are held by value; callers get copies, never shared
/// references into the set.
#[derive(Clone, Debug)]
pub struct LineSpace {
    name: String,
    is_white: bool,
    lines: HashSet<MoveSequence>,
}

impl LineSpace {
    /// Build a space from seed lines. The member set is the union of
    /// every prefix of every seed, so the empty sequence is always
    /// present.
    pub fn new<I>(name: &str, is_white: bool, seeds: I) -> Self
    where
        I: IntoIterator<Item = MoveSequence>,
    {
        let mut space = Self {
            name: name.to_string(),
            is_white,
            lines: HashSet::new(),
        };
        space.lines.insert(MoveSequence::new());
        for seed in seeds {
            space.add(&seed);
        }
        space
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_white(&self) -> bool {
        self.is_white
    }

    /// Number of stored lines, prefixes included.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Exact-match membership.
    pub fn contains(&self, line: &MoveSequence) -> bool {
        self.lines.contains(line)
    }

    /// Iterate over the stored lines. Order is unspecified but stable
    /// while the space is unmodified.
    pub fn iter(&self) -> impl Iterator<Item = &MoveSequence> {
        self.lines.iter()
    }

    /// Insert `line` together with all of its prefixes, keeping the
    /// set prefix-closed.
    pub fn add(&mut self, line: &MoveSequence) {
        for k in 0..=line.len() {
            self.lines.insert(line.slice(0..k));
        }
    }

    /// Remove `line` and every stored extension of it — the whole
    /// branch goes in one call. Prefixes of `line` stay (they may
    /// still be reachable from other lines).
    pub fn discard(&mut self, line: &MoveSequence) {
        self.lines.retain(|stored| !stored.starts_with(line));
    }

    /// Truncations `line[0..length]` of every stored line of at least
    /// `length` moves: the repertoire as of ply `length`, regardless
    /// of how deep individual lines go.
    pub fn filter_for_length(&self, length: usize) -> HashSet<MoveSequence> {
        self.lines
            .iter()
            .filter(|line| line.len() >= length)
            .map(|line| line.slice(0..length))
            .collect()
    }

    /// Whether the 0-based ply `move_number` belongs to the repertoire
    /// owner. Ply 0 is white's first move.
    pub fn is_your_move(&self, move_number: usize) -> bool {
        (move_number % 2 == 0) == self.is_white
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(raw: &str) -> MoveSequence {
        MoveSequence::parse(raw)
    }

    #[test]
    fn test_new_takes_prefix_closure() {
        let space = LineSpace::new("rep", true, [seq("e4 e5 Nf3")]);
        assert_eq!(space.len(), 4);
        assert!(space.contains(&MoveSequence::new()));
        assert!(space.contains(&seq("e4")));
        assert!(space.contains(&seq("e4 e5")));
        assert!(space.contains(&seq("e4 e5 Nf3")));
        assert!(!space.contains(&seq("e4 e5 Nf3 Nc6")));
    }

    #[test]
    fn test_shared_prefixes_stored_once() {
        let space = LineSpace::new("rep", true, [seq("e4 e5 Nf3"), seq("e4 c5 Nf3")]);
        // Empty, e4, and two branches of two moves each.
        assert_eq!(space.len(), 6);
    }

    #[test]
    fn test_add_expands_closure_and_is_idempotent() {
        let mut space = LineSpace::new("rep", true, []);
        assert_eq!(space.len(), 1);

        space.add(&seq("d4 d5 c4"));
        assert_eq!(space.len(), 4);
        assert!(space.contains(&seq("d4 d5")));

        let before: Vec<MoveSequence> = {
            let mut lines: Vec<_> = space.iter().cloned().collect();
            lines.sort();
            lines
        };
        space.add(&seq("d4 d5 c4"));
        let mut after: Vec<_> = space.iter().cloned().collect();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_discard_prunes_whole_branch() {
        let mut space = LineSpace::new(
            "rep",
            true,
            [seq("e4 e5 Nf3 Nc6 Bb5"), seq("e4 e5 Bc4")],
        );
        space.discard(&seq("e4 e5 Nf3"));

        // Nothing extending the discarded line remains.
        assert!(!space.contains(&seq("e4 e5 Nf3")));
        assert!(!space.contains(&seq("e4 e5 Nf3 Nc6")));
        assert!(!space.contains(&seq("e4 e5 Nf3 Nc6 Bb5")));

        // Shorter prefixes stay: they are reachable from the other line.
        assert!(space.contains(&seq("e4 e5")));
        assert!(space.contains(&seq("e4 e5 Bc4")));
    }

    #[test]
    fn test_filter_for_length() {
        let space = LineSpace::new("rep", true, [seq("e4 e5 Nf3 Nc6"), seq("d4 d5")]);
        let at_two = space.filter_for_length(2);
        assert_eq!(at_two.len(), 2);
        assert!(at_two.contains(&seq("e4 e5")));
        assert!(at_two.contains(&seq("d4 d5")));

        let at_three = space.filter_for_length(3);
        assert_eq!(at_three.len(), 1);
        assert!(at_three.contains(&seq("e4 e5 Nf3")));

        assert!(space.filter_for_length(9).is_empty());
    }

    #[test]
    fn test_is_your_move_parity() {
        let white = LineSpace::new("w", true, []);
        assert!(white.is_your_move(0));
        assert!(!white.is_your_move(1));
        assert!(white.is_your_move(2));

        let black = LineSpace::new("b", false, []);
        assert!(!black.is_your_move(0));
        assert!(black.is_your_move(1));
        assert!(!black.is_your_move(2));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let space = LineSpace::new("rep", true, [seq("e4 e5"), seq("d4")]);
        let first: Vec<&MoveSequence> = space.iter().collect();
        let second: Vec<&MoveSequence> = space.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_slice_of_member_is_member() {
        let line = seq("g4 e5 Bg2 Bb4 Nc3");
        let space = LineSpace::new("rep", true, [line.clone()]);
        for k in 0..=line.len() {
            assert!(space.contains(&line.slice(0..k)));
        }
    }
}
