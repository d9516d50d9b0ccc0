//! Ordered collection of participants.
//!
//! Insertion order is display order. Lookups by id that find nothing are
//! silent no-ops reported through the return value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{Participant, ParticipantFields, ParticipantId};

/// How new participants get their id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// A counter owned by the registry; ids are never reused.
    #[default]
    Monotonic,
    /// `len + 1` at creation time. Can hand out an id that is still live
    /// after a delete followed by an add.
    LengthPlusOne,
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::Monotonic => write!(f, "monotonic"),
            IdPolicy::LengthPlusOne => write!(f, "length_plus_one"),
        }
    }
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "monotonic" => Ok(IdPolicy::Monotonic),
            "length_plus_one" | "length" => Ok(IdPolicy::LengthPlusOne),
            other => Err(format!("unknown id policy: {other}")),
        }
    }
}

/// The participant list.
#[derive(Debug, Clone, Default)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
    policy: IdPolicy,
    /// Highest id handed out so far.
    counter: u32,
}

impl ParticipantRegistry {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            participants: Vec::new(),
            policy,
            counter: 0,
        }
    }

    /// The id the next `add` will assign.
    pub fn next_id(&self) -> ParticipantId {
        match self.policy {
            IdPolicy::Monotonic => ParticipantId(self.counter + 1),
            IdPolicy::LengthPlusOne => ParticipantId(self.participants.len() as u32 + 1),
        }
    }

    /// Append a participant, assigning its id from the policy.
    pub fn add(&mut self, fields: ParticipantFields) -> ParticipantId {
        let id = self.next_id();
        if self.get(id).is_some() {
            tracing::warn!(%id, "assigned id is already live (length_plus_one policy)");
        }
        self.counter = self.counter.max(id.0);
        self.participants.push(Participant { id, fields });
        tracing::debug!(%id, total = self.participants.len(), "participant added");
        id
    }

    /// Replace every field except the id of the matching participant.
    ///
    /// Returns `false` and leaves the list untouched if no participant matches.
    pub fn update(&mut self, id: ParticipantId, fields: ParticipantFields) -> bool {
        // With length_plus_one, duplicate ids are possible; every match is replaced.
        let mut found = false;
        for p in self.participants.iter_mut().filter(|p| p.id == id) {
            p.fields = fields.clone();
            found = true;
        }
        if found {
            tracing::debug!(%id, "participant updated");
        } else {
            tracing::debug!(%id, "update target not found, ignoring");
        }
        found
    }

    /// Remove the matching participant. Returns `false` if none matched.
    pub fn remove(&mut self, id: ParticipantId) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p.id != id);
        let removed = self.participants.len() != before;
        if removed {
            tracing::debug!(%id, total = self.participants.len(), "participant removed");
        } else {
            tracing::debug!(%id, "delete target not found, ignoring");
        }
        removed
    }

    /// All participants in insertion order.
    pub fn all(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
