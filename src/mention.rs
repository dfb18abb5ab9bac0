//! Mention resolution: `@` trigger detection, candidate narrowing, and
//! exact-match recipient binding.
//!
//! Resolution is a pure re-derivation per edit rather than an incrementally
//! updated automaton: the composer hands the whole draft and the current
//! roster in, and gets the binding and suggestion list back. Running it
//! twice on the same input yields the same result.

use serde::{Deserialize, Serialize};

use crate::roster::{Participant, ParticipantIndex};

/// The resolved private-message target, if any.
///
/// `tag` is the literal `@name` substring as it appears in the draft; the
/// composer strips it from the payload at submit time.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum RecipientBinding {
    #[default]
    Unbound,
    Bound {
        participant: Participant,
        tag: String,
    },
}

impl RecipientBinding {
    /// Bind to a participant, deriving the `@name` tag from their name.
    pub fn bound_to(participant: Participant) -> Self {
        let tag = format!("@{}", participant.name);
        RecipientBinding::Bound { participant, tag }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, RecipientBinding::Bound { .. })
    }

    /// The bound participant, if any.
    pub fn participant(&self) -> Option<&Participant> {
        match self {
            RecipientBinding::Bound { participant, .. } => Some(participant),
            RecipientBinding::Unbound => None,
        }
    }

    /// The literal `@name` tag as it appears in the draft, if bound.
    pub fn tag(&self) -> Option<&str> {
        match self {
            RecipientBinding::Bound { tag, .. } => Some(tag),
            RecipientBinding::Unbound => None,
        }
    }
}

/// One entry of the suggestion list shown while the user is mid-mention.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// Display form, `@` followed by the participant name.
    pub display: String,
}

/// Result of resolving a draft that is in mention mode with a real token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MentionOutcome {
    pub binding: RecipientBinding,
    pub suggestions: Vec<Suggestion>,
    /// The token that was matched: the text between `@` and the first space.
    pub token: String,
}

/// Optional hook receiving each resolution outcome.
///
/// Hosts that want visibility into candidate narrowing install an observer
/// on the composer; the resolver itself never logs.
pub trait MentionObserver {
    fn on_resolution(&mut self, outcome: &MentionOutcome);
}

/// Re-derive the recipient binding and suggestion list from the draft.
///
/// Returns `None` when the draft is not in mention mode: it does not start
/// with `@`, or the token after `@` is empty or whitespace-only ("mention
/// mode, no candidates yet"). The caller must leave any existing binding
/// untouched in that case. A `@` anywhere but position 0 has no meaning.
///
/// Two independent passes over the roster:
/// - substring containment feeds the suggestion popup and never affects the
///   binding;
/// - exact name equality binds the recipient, or explicitly unbinds when no
///   participant matches (duplicate names bind roster-order-first).
pub fn resolve(draft: &str, roster: &dyn ParticipantIndex) -> Option<MentionOutcome> {
    let rest = draft.strip_prefix('@')?;
    let token = rest.split(' ').next().unwrap_or_default();
    if token.trim().is_empty() {
        return None;
    }

    let suggestions = roster
        .search(token)
        .into_iter()
        .map(|p| Suggestion {
            display: format!("@{}", p.name),
        })
        .collect();

    let binding = match roster.find_by_name(token) {
        Some(p) => RecipientBinding::bound_to(p.clone()),
        None => RecipientBinding::Unbound,
    };

    Some(MentionOutcome {
        binding,
        suggestions,
        token: token.to_string(),
    })
}
