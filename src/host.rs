//! Actions emitted from the composer to the host application.
//!
//! The composer never calls into the host directly; it queues actions on a
//! channel and the host drains them on its own schedule - delivering the
//! message, updating the private delivery scope, or restoring input focus.
//! Focus restoration is a best-effort hint with no ordering guarantee
//! relative to later edits.

use serde::{Deserialize, Serialize};

use crate::mention::RecipientBinding;
use crate::roster::Participant;

/// Actions sent from the composer to the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    /// Deliver a finished message. `text` has the visible mention tag
    /// stripped; `recipient` carries the active binding so the host can
    /// restrict delivery independently of the text.
    Deliver {
        text: String,
        recipient: RecipientBinding,
    },
    /// The recipient binding transitioned while editing; the host should
    /// update its delivery scope to match.
    SetPrivateRecipient(Option<Participant>),
    /// Hint to put focus back on the input widget.
    RequestFocus,
}
