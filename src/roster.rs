//! Read-only view over the conference participant roster.
//!
//! The host application owns roster storage; this subsystem only reads it.
//! The roster may change between calls (participants join and leave while a
//! draft is open) - each edit simply re-resolves against whatever the index
//! returns at that moment, so no synchronization is needed here.

use serde::{Deserialize, Serialize};

/// A conference participant eligible for mention targeting.
///
/// `id` is an opaque identifier assigned by the host and is the true anchor
/// for private delivery; `name` is the display name used for mention
/// matching. Names are compared case-sensitively and are not guaranteed
/// unique - lookups resolve duplicates to the first participant in roster
/// order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    pub name: String,
}

/// Read-only lookup interface over the current roster.
pub trait ParticipantIndex {
    /// All participants, in roster order.
    fn all(&self) -> &[Participant];

    /// First participant whose name equals `name` exactly.
    fn find_by_name(&self, name: &str) -> Option<&Participant> {
        self.all().iter().find(|p| p.name == name)
    }

    /// Participants whose name contains `token` as a substring, roster order.
    ///
    /// Simple case-sensitive containment, not fuzzy matching.
    fn search(&self, token: &str) -> Vec<&Participant> {
        self.all()
            .iter()
            .filter(|p| p.name.contains(token))
            .collect()
    }
}

/// Vec-backed roster for hosts without their own index type.
#[derive(Default, Clone, Debug)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_participants(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    /// Append a participant, keeping join order.
    pub fn add(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.participants.push(Participant {
            id: id.into(),
            name: name.into(),
        });
    }

    /// Remove a participant by id (e.g. when they leave the conference).
    pub fn remove(&mut self, id: &str) {
        self.participants.retain(|p| p.id != id);
    }
}

impl ParticipantIndex for Roster {
    fn all(&self) -> &[Participant] {
        &self.participants
    }
}
