//! Message composer: draft ownership, mention orchestration, and submit.
//!
//! The composer owns the draft buffer exclusively. Every edit re-runs
//! mention resolution against the roster; submit trims the draft, strips the
//! bound mention tag, and queues the finished message for the host. All
//! entry points run to completion synchronously within the calling event.

use crossbeam_channel::Sender;

use crate::host::HostAction;
use crate::mention::{self, MentionObserver, RecipientBinding, Suggestion};
use crate::roster::{Participant, ParticipantIndex};

/// A key event relevant to submission, as reported by the host's widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitKey {
    pub is_enter: bool,
    pub shift_held: bool,
}

/// Owns the draft and the active recipient binding.
pub struct MessageComposer {
    draft: String,
    binding: RecipientBinding,
    suggestions: Vec<Suggestion>,
    actions: Sender<HostAction>,
    observer: Option<Box<dyn MentionObserver>>,
}

impl MessageComposer {
    pub fn new(actions: Sender<HostAction>) -> Self {
        Self {
            draft: String::new(),
            binding: RecipientBinding::Unbound,
            suggestions: Vec::new(),
            actions,
            observer: None,
        }
    }

    /// Install a diagnostics hook receiving each mention resolution.
    pub fn with_observer(mut self, observer: Box<dyn MentionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn binding(&self) -> &RecipientBinding {
        &self.binding
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Whether the draft holds anything beyond whitespace.
    pub fn has_content(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Replace the draft with the widget's current text and re-resolve.
    ///
    /// Outside mention mode the binding is left exactly as it was and the
    /// suggestion popup goes away; inside it, the binding follows the
    /// resolver (including an explicit unbind when the token stops matching)
    /// and transitions are reported to the host.
    pub fn on_edit(&mut self, text: &str, roster: &dyn ParticipantIndex) {
        self.draft = text.to_string();
        match mention::resolve(&self.draft, roster) {
            Some(outcome) => {
                if let Some(observer) = self.observer.as_mut() {
                    observer.on_resolution(&outcome);
                }
                self.suggestions = outcome.suggestions;
                self.transition_binding(outcome.binding);
            }
            None => {
                self.suggestions.clear();
            }
        }
    }

    /// Update the binding, notifying the host only on an actual change.
    fn transition_binding(&mut self, new: RecipientBinding) {
        if new == self.binding {
            return;
        }
        self.binding = new;
        let _ = self.actions.send(HostAction::SetPrivateRecipient(
            self.binding.participant().cloned(),
        ));
    }

    /// Submit the draft: trim, strip the mention tag, deliver, clear.
    ///
    /// A whitespace-only draft is silently ignored and left as typed. The
    /// binding survives the send - private mode stays active until the host
    /// clears or retargets it.
    pub fn on_submit(&mut self) {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return;
        }

        let text = match self.binding.tag() {
            // The visible mention marker is not part of the payload.
            Some(tag) => trimmed.replacen(&format!("{} ", tag), "", 1),
            None => trimmed.to_string(),
        };

        let _ = self.actions.send(HostAction::Deliver {
            text,
            recipient: self.binding.clone(),
        });
        self.draft.clear();
        self.suggestions.clear();
        let _ = self.actions.send(HostAction::RequestFocus);
    }

    /// Send-button path; identical to the key path.
    pub fn on_submit_click(&mut self) {
        self.on_submit();
    }

    /// Handle a potential submit key.
    ///
    /// Plain Enter submits and returns `true`: the host must suppress the
    /// newline the widget would otherwise insert. Shift+Enter (and anything
    /// else) returns `false` untouched - the widget inserts the newline
    /// itself and reports the new text through [`MessageComposer::on_edit`].
    pub fn on_submit_key(&mut self, key: SubmitKey) -> bool {
        if key.is_enter && !key.shift_held {
            self.on_submit();
            true
        } else {
            false
        }
    }

    /// Append a picked smiley to the draft, space-separated, exactly as the
    /// picker inserts it. Mention state is untouched.
    pub fn on_smiley_selected(&mut self, smiley: &str) {
        self.draft = format!("{} {}", self.draft, smiley);
        let _ = self.actions.send(HostAction::RequestFocus);
    }

    /// Host-initiated retarget, e.g. a reply button next to a received
    /// private message. Not echoed back through the action channel.
    pub fn set_recipient(&mut self, participant: Participant) {
        self.binding = RecipientBinding::bound_to(participant);
    }

    /// Host-initiated clear of private mode (privacy dialog path).
    pub fn clear_recipient(&mut self) {
        self.binding = RecipientBinding::Unbound;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;
    use crossbeam_channel::{unbounded, Receiver};

    fn setup() -> (MessageComposer, Receiver<HostAction>, Roster) {
        let (tx, rx) = unbounded();
        let mut roster = Roster::new();
        roster.add("1", "Ana");
        roster.add("2", "Anabel");
        roster.add("3", "Bob");
        (MessageComposer::new(tx), rx, roster)
    }

    #[test]
    fn test_edit_without_mention_leaves_binding_alone() {
        let (mut composer, rx, roster) = setup();
        composer.on_edit("@Ana", &roster);
        assert!(composer.binding().is_bound());
        rx.try_recv().unwrap(); // SetPrivateRecipient(Some)

        composer.on_edit("hello @Ana", &roster);
        assert!(composer.binding().is_bound());
        assert!(composer.suggestions().is_empty());
        assert!(rx.try_recv().is_err()); // no transition reported
    }

    #[test]
    fn test_binding_transitions_are_reported_once() {
        let (mut composer, rx, roster) = setup();
        composer.on_edit("@Ana", &roster);
        composer.on_edit("@Ana ", &roster);
        composer.on_edit("@Ana hi", &roster);

        let actions: Vec<HostAction> = rx.try_iter().collect();
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            HostAction::SetPrivateRecipient(Some(p)) => assert_eq!(p.name, "Ana"),
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_editing_mention_away_unbinds() {
        let (mut composer, rx, roster) = setup();
        composer.on_edit("@Ana", &roster);
        composer.on_edit("@Anx", &roster);
        let actions: Vec<HostAction> = rx.try_iter().collect();
        assert_eq!(
            actions.last(),
            Some(&HostAction::SetPrivateRecipient(None))
        );
        assert!(!composer.binding().is_bound());
    }

    #[test]
    fn test_submit_strips_tag_and_clears_draft() {
        let (mut composer, rx, roster) = setup();
        composer.on_edit("@Ana hello there", &roster);
        composer.on_submit();

        let actions: Vec<HostAction> = rx.try_iter().collect();
        let delivered = actions
            .iter()
            .find_map(|a| match a {
                HostAction::Deliver { text, recipient } => Some((text.clone(), recipient.clone())),
                _ => None,
            })
            .expect("a Deliver action");
        assert_eq!(delivered.0, "hello there");
        assert_eq!(delivered.1.tag(), Some("@Ana"));
        assert_eq!(composer.draft(), "");
        assert!(actions.contains(&HostAction::RequestFocus));
    }

    #[test]
    fn test_binding_is_sticky_across_sends() {
        let (mut composer, rx, roster) = setup();
        composer.on_edit("@Ana hi", &roster);
        composer.on_submit();
        composer.on_edit("still private", &roster);
        composer.on_submit();

        let deliveries: Vec<HostAction> = rx
            .try_iter()
            .filter(|a| matches!(a, HostAction::Deliver { .. }))
            .collect();
        assert_eq!(deliveries.len(), 2);
        match &deliveries[1] {
            HostAction::Deliver { text, recipient } => {
                assert_eq!(text, "still private");
                assert!(recipient.is_bound());
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_only_submit_is_ignored() {
        let (mut composer, rx, roster) = setup();
        composer.on_edit("   ", &roster);
        composer.on_submit();
        assert_eq!(composer.draft(), "   ");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_submit_trims_surrounding_whitespace() {
        let (mut composer, rx, roster) = setup();
        composer.on_edit("  hi there \n", &roster);
        composer.on_submit();
        let actions: Vec<HostAction> = rx.try_iter().collect();
        assert!(actions.contains(&HostAction::Deliver {
            text: "hi there".to_string(),
            recipient: RecipientBinding::Unbound,
        }));
    }

    #[test]
    fn test_plain_enter_submits_and_consumes() {
        let (mut composer, rx, roster) = setup();
        composer.on_edit("hi", &roster);
        let consumed = composer.on_submit_key(SubmitKey {
            is_enter: true,
            shift_held: false,
        });
        assert!(consumed);
        assert_eq!(composer.draft(), "");
        assert!(rx.try_iter().any(|a| matches!(a, HostAction::Deliver { .. })));
    }

    #[test]
    fn test_shift_enter_never_submits() {
        let (mut composer, rx, roster) = setup();
        composer.on_edit("hi", &roster);
        let consumed = composer.on_submit_key(SubmitKey {
            is_enter: true,
            shift_held: true,
        });
        assert!(!consumed);
        assert_eq!(composer.draft(), "hi");
        assert!(!composer.binding().is_bound());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_smiley_appends_with_space() {
        let (mut composer, rx, roster) = setup();
        composer.on_edit("hi", &roster);
        composer.on_smiley_selected("😀");
        assert_eq!(composer.draft(), "hi 😀");
        assert!(!composer.binding().is_bound());
        assert_eq!(rx.try_recv(), Ok(HostAction::RequestFocus));
    }

    #[test]
    fn test_host_initiated_retarget_is_not_echoed() {
        let (mut composer, rx, _roster) = setup();
        composer.set_recipient(Participant {
            id: "3".to_string(),
            name: "Bob".to_string(),
        });
        assert_eq!(composer.binding().tag(), Some("@Bob"));
        composer.clear_recipient();
        assert!(!composer.binding().is_bound());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_has_content() {
        let (mut composer, _rx, roster) = setup();
        assert!(!composer.has_content());
        composer.on_edit("  ", &roster);
        assert!(!composer.has_content());
        composer.on_edit(" x ", &roster);
        assert!(composer.has_content());
    }
}
