use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::core::format::{self, RosterFormat};
use crate::domain::model::Participant;
use crate::domain::ports::Storage;
use crate::utils::error::{Result, RosterError};

/// The in-memory roster for one conference: an ordered list of participants
/// plus the conference discount code.
///
/// Insertion order is preserved, duplicates are allowed and identity is
/// positional. The discount code is generated once at construction and is
/// stable for the lifetime of the instance.
#[derive(Debug)]
pub struct Roster {
    participants: Vec<Participant>,
    discount_code: Uuid,
}

impl Roster {
    /// Creates an empty roster with a fresh random discount code.
    pub fn new() -> Self {
        Self {
            participants: Vec::new(),
            discount_code: Uuid::new_v4(),
        }
    }

    /// Read-only view of the participants, in insertion order. Mutation goes
    /// through [`add_participant`](Self::add_participant) and
    /// [`remove_participant`](Self::remove_participant).
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Appends a participant to the end of the roster. Always succeeds.
    pub fn add_participant(&mut self, participant: Participant) {
        self.participants.push(participant);
        tracing::debug!("Added participant, roster holds {}", self.participants.len());
    }

    /// Removes and returns the participant at the given zero-based index,
    /// shifting subsequent participants left.
    ///
    /// Fails with [`RosterError::OutOfRange`] and leaves the roster
    /// unmodified when `index >= len`.
    pub fn remove_participant(&mut self, index: usize) -> Result<Participant> {
        if index >= self.participants.len() {
            return Err(RosterError::OutOfRange {
                index,
                len: self.participants.len(),
            });
        }

        Ok(self.participants.remove(index))
    }

    /// The conference discount code as its canonical hyphenated string.
    /// Stable across repeated calls on the same instance.
    pub fn discount_code(&self) -> String {
        self.discount_code.to_string()
    }

    /// Serializes the roster to `path` in the given format, creating missing
    /// parent directories and overwriting an existing file. Returns the
    /// resolved absolute path of the written file.
    pub fn save<S: Storage>(
        &self,
        storage: &S,
        path: &Path,
        format: RosterFormat,
    ) -> Result<PathBuf> {
        let contents = format::encode(&self.participants, format)?;
        let full_path = storage.write_string(path, &contents)?;

        tracing::debug!(
            "Saved {} participants to {}",
            self.participants.len(),
            full_path.display()
        );

        Ok(full_path)
    }

    /// Loads a roster from `path`, one participant per line, in file order.
    ///
    /// Returns a brand-new roster with a freshly generated discount code;
    /// the code of a previously saved roster is not restored. Callers adopt
    /// the returned roster as a wholesale replacement. On any failure the
    /// caller's existing roster is untouched and no partial roster is
    /// returned.
    pub fn load<S: Storage>(storage: &S, path: &Path, format: RosterFormat) -> Result<Self> {
        let contents = storage.read_to_string(path)?;
        let participants = format::parse(&contents, format)?;

        tracing::debug!(
            "Loaded {} participants from {}",
            participants.len(),
            path.display()
        );

        let mut roster = Roster::new();
        roster.participants = participants;
        Ok(roster)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
