//! Line spaces with a depth-bounded uniqueness constraint.

use std::collections::HashSet;

use crate::line_space::LineSpace;
use crate::sequence::MoveSequence;

/// A [`LineSpace`] that keeps at most one owner reply per opponent
/// prefix beyond a configured depth, on the theory that memorizing
/// several answers to the same deep opponent try is impractical.
///
/// `uniqueness_number` is counted in full moves: ply index `p` is
/// *deep* once `p / 2 + 1 >= uniqueness_number`. At every deep ply
/// where the owner is to move, at most one stored continuation may
/// extend a given prefix; competing branches are discarded
/// automatically rather than reported.
///
/// Wraps a `LineSpace` by composition so the repair passes go through
/// the ordinary whole-branch [`LineSpace::discard`].
#[derive(Clone, Debug)]
pub struct UniqueLineSpace {
    space: LineSpace,
    uniqueness_number: usize,
}

impl UniqueLineSpace {
    /// Build the ordinary prefix closure of `seeds`, then discard
    /// violating branches until a full pass finds none.
    pub fn new<I>(name: &str, is_white: bool, uniqueness_number: usize, seeds: I) -> Self
    where
        I: IntoIterator<Item = MoveSequence>,
    {
        let mut unique = Self {
            space: LineSpace::new(name, is_white, seeds),
            uniqueness_number,
        };
        unique.repair();
        unique
    }

    pub fn uniqueness_number(&self) -> usize {
        self.uniqueness_number
    }

    pub fn name(&self) -> &str {
        self.space.name()
    }

    pub fn is_white(&self) -> bool {
        self.space.is_white()
    }

    pub fn len(&self) -> usize {
        self.space.len()
    }

    pub fn is_empty(&self) -> bool {
        self.space.is_empty()
    }

    pub fn contains(&self, line: &MoveSequence) -> bool {
        self.space.contains(line)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveSequence> {
        self.space.iter()
    }

    pub fn discard(&mut self, line: &MoveSequence) {
        self.space.discard(line);
    }

    pub fn filter_for_length(&self, length: usize) -> HashSet<MoveSequence> {
        self.space.filter_for_length(length)
    }

    pub fn is_your_move(&self, move_number: usize) -> bool {
        self.space.is_your_move(move_number)
    }

    /// Add `line` with its prefixes, then re-impose uniqueness along
    /// the added line until stable. The same survivor rule applies as
    /// at construction, so an added line that loses its collision is
    /// itself discarded again.
    pub fn add(&mut self, line: &MoveSequence) {
        self.space.add(line);
        self.repair_along(line);
    }

    /// Check `line` against the uniqueness invariant: at every deep
    /// owner-turn ply, the preceding prefix must have at most one
    /// stored continuation. Returns false at the first violation.
    pub fn check_uniqueness(&self, line: &MoveSequence) -> bool {
        for ply in 0..line.len() {
            if !self.constrained_ply(ply) {
                continue;
            }
            if self.continuations(&line.slice(0..ply)).len() > 1 {
                return false;
            }
        }
        true
    }

    /// A ply is constrained when it is the owner's move and its
    /// full-move number has reached the threshold.
    fn constrained_ply(&self, ply: usize) -> bool {
        self.space.is_your_move(ply) && ply / 2 + 1 >= self.uniqueness_number
    }

    /// Stored lines exactly one ply longer than `prefix` that extend
    /// it: the candidate replies at that position.
    fn continuations(&self, prefix: &MoveSequence) -> Vec<MoveSequence> {
        let mut found: Vec<MoveSequence> = self
            .space
            .iter()
            .filter(|line| line.len() == prefix.len() + 1 && line.starts_with(prefix))
            .cloned()
            .collect();
        found.sort();
        found
    }

    /// Full repair pass: scan every stored prefix, and wherever a
    /// constrained ply has several continuations, discard all but one
    /// branch. Repeats until a pass is clean. The lexicographically
    /// smallest competing reply survives, which keeps repair
    /// deterministic.
    fn repair(&mut self) {
        loop {
            let mut victims: Vec<MoveSequence> = Vec::new();
            for prefix in self.space.iter() {
                if !self.constrained_ply(prefix.len()) {
                    continue;
                }
                let conts = self.continuations(prefix);
                if conts.len() > 1 {
                    victims.extend(conts.into_iter().skip(1));
                }
            }
            if victims.is_empty() {
                break;
            }
            for victim in &victims {
                self.space.discard(victim);
            }
        }
    }

    /// Repair restricted to the prefixes of `line`, for use after an
    /// `add`: only positions along the new line can have gained a
    /// competing continuation.
    fn repair_along(&mut self, line: &MoveSequence) {
        loop {
            let mut victims: Vec<MoveSequence> = Vec::new();
            for ply in 0..line.len() {
                if !self.constrained_ply(ply) {
                    continue;
                }
                let prefix = line.slice(0..ply);
                if !self.space.contains(&prefix) {
                    break;
                }
                let conts = self.continuations(&prefix);
                if conts.len() > 1 {
                    victims.extend(conts.into_iter().skip(1));
                }
            }
            if victims.is_empty() {
                break;
            }
            for victim in &victims {
                self.space.discard(victim);
            }
        }
    }
}
