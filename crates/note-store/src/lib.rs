//! Annotation storage keyed by repertoire lines.
//!
//! A [`NoteBook`] is an inert key-value store: notes attach to a
//! `MoveSequence` by content equality and hash, and the store never
//! interprets a line beyond that. No persistence format is defined
//! here.

use std::collections::HashMap;

use chrono::NaiveDate;
use repertoire_core::MoveSequence;
use serde::{Deserialize, Serialize};

/// A single annotation on a line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    pub created: Option<NaiveDate>,
}

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    /// The raw key parsed to an empty line despite being nonempty.
    #[error("note key contains no valid moves: {0:?}")]
    NoValidMoves(String),
}

/// Notes for one repertoire, keyed by line.
///
/// Lines used as keys are treated as immutable once inserted, the
/// usual contract for hash-keyed collections.
#[derive(Clone, Debug, Default)]
pub struct NoteBook {
    name: String,
    notes: HashMap<MoveSequence, Vec<Note>>,
}

impl NoteBook {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            notes: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of annotated lines (not the number of notes).
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Attach an undated note to `line`.
    pub fn annotate(&mut self, line: &MoveSequence, text: &str) {
        self.annotate_dated(line, text, None);
    }

    /// Attach a note to `line` with an optional creation date.
    pub fn annotate_dated(&mut self, line: &MoveSequence, text: &str, created: Option<NaiveDate>) {
        self.notes.entry(line.clone()).or_default().push(Note {
            text: text.to_string(),
            created,
        });
    }

    /// Attach a note to a line given as raw text.
    ///
    /// The raw key goes through `MoveSequence::parse`; if a nonempty
    /// input yields no valid moves the operation is declined with a
    /// warning and the store is left unmodified. An empty input keys
    /// the empty line (the repertoire root).
    pub fn annotate_raw(&mut self, raw: &str, text: &str) -> Result<(), NoteError> {
        let line = MoveSequence::parse(raw);
        if line.is_empty() && !raw.trim().is_empty() {
            tracing::warn!("declining note for unusable line key: {:?}", raw);
            return Err(NoteError::NoValidMoves(raw.to_string()));
        }
        self.annotate(&line, text);
        Ok(())
    }

    /// Every note attached to `line`, in insertion order.
    pub fn notes(&self, line: &MoveSequence) -> &[Note] {
        self.notes.get(line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drop every note attached to `line`. Returns how many were
    /// removed.
    pub fn remove(&mut self, line: &MoveSequence) -> usize {
        self.notes.remove(line).map(|notes| notes.len()).unwrap_or(0)
    }

    /// Iterate over annotated lines and their notes.
    pub fn iter(&self) -> impl Iterator<Item = (&MoveSequence, &[Note])> {
        self.notes.iter().map(|(line, notes)| (line, notes.as_slice()))
    }
}
