use std::sync::Arc;

use tokio::sync::watch;

use crate::models::{Message, Role};

/// Everything a display layer needs to render the conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptSnapshot {
    pub messages: Vec<Message>,
    /// True exactly while a backend round trip is outstanding.
    pub pending: bool,
    /// Description of the most recent failed round trip, cleared when the
    /// next one begins.
    pub last_error: Option<String>,
}

impl TranscriptSnapshot {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Nothing said yet and nothing in flight: the UI shows its prompt.
    pub fn is_placeholder(&self) -> bool {
        self.messages.is_empty() && !self.pending
    }
}

/// Append-only transcript plus the pending flag for a single conversation.
///
/// Every mutation commits a whole new snapshot and wakes subscribers, so a
/// reader never observes a half-applied change. Clones share the same state.
#[derive(Clone)]
pub struct TranscriptStore {
    tx: Arc<watch::Sender<TranscriptSnapshot>>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(TranscriptSnapshot::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn append_message(&self, role: Role, content: impl Into<String>) {
        let message = Message::new(role, content);
        self.tx.send_modify(|state| state.messages.push(message));
    }

    /// Appends every entry in order as one committed change.
    pub fn append_batch<I>(&self, role: Role, contents: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let batch: Vec<Message> = contents
            .into_iter()
            .map(|content| Message::new(role, content))
            .collect();
        if batch.is_empty() {
            return;
        }
        self.tx.send_modify(|state| state.messages.extend(batch));
    }

    pub fn set_pending(&self, pending: bool) {
        self.tx.send_if_modified(|state| {
            let changed = state.pending != pending;
            state.pending = pending;
            changed
        });
    }

    pub fn set_last_error(&self, error: Option<String>) {
        self.tx.send_if_modified(|state| {
            let changed = state.last_error != error;
            state.last_error = error;
            changed
        });
    }

    /// Appends the user's message and raises the pending flag in a single
    /// commit, unless a round trip is already outstanding.
    ///
    /// Returns `false` (and changes nothing) when pending is already set.
    pub fn try_begin_round_trip(&self, user_content: &str) -> bool {
        self.tx.send_if_modified(|state| {
            if state.pending {
                return false;
            }
            state.messages.push(Message::user(user_content));
            state.pending = true;
            state.last_error = None;
            true
        })
    }

    /// Folds a completed round trip back in: replies are appended and the
    /// pending flag cleared in one commit.
    pub fn finish_round_trip(&self, replies: Vec<String>, error: Option<String>) {
        self.tx.send_modify(|state| {
            state
                .messages
                .extend(replies.into_iter().map(Message::system));
            state.pending = false;
            state.last_error = error;
        });
    }

    pub fn current_state(&self) -> TranscriptSnapshot {
        self.tx.borrow().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.tx.borrow().pending
    }

    /// Receiver woken after every committed change (auto-scroll, printers,
    /// signal bridges).
    pub fn subscribe(&self) -> watch::Receiver<TranscriptSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for TranscriptStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_idle() {
        let store = TranscriptStore::new();
        let state = store.current_state();
        assert!(state.is_empty());
        assert!(!state.pending);
        assert!(state.is_placeholder());
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn appends_preserve_arrival_order() {
        let store = TranscriptStore::new();
        store.append_message(Role::User, "first");
        store.append_batch(Role::System, ["second", "third"]);
        store.append_message(Role::User, "fourth");

        let contents: Vec<_> = store
            .current_state()
            .messages
            .into_iter()
            .map(|m| (m.role, m.content))
            .collect();
        assert_eq!(
            contents,
            vec![
                (Role::User, "first".to_string()),
                (Role::System, "second".to_string()),
                (Role::System, "third".to_string()),
                (Role::User, "fourth".to_string()),
            ]
        );
    }

    #[test]
    fn batch_is_a_single_commit() {
        let store = TranscriptStore::new();
        let mut rx = store.subscribe();

        store.append_batch(Role::System, vec!["a", "b", "c"]);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 3);
        assert!(!rx.has_changed().unwrap());

        store.append_batch(Role::System, Vec::<String>::new());
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn begin_round_trip_refuses_while_pending() {
        let store = TranscriptStore::new();
        assert!(store.try_begin_round_trip("hello"));
        assert!(store.is_pending());
        assert!(!store.try_begin_round_trip("again"));
        assert_eq!(store.current_state().len(), 1);

        store.finish_round_trip(vec!["hi".to_string()], None);
        let state = store.current_state();
        assert!(!state.pending);
        assert_eq!(state.messages[1], Message::system("hi"));
    }

    #[test]
    fn begin_round_trip_clears_previous_error() {
        let store = TranscriptStore::new();
        store.set_last_error(Some("Server error: status 500".to_string()));
        assert!(store.try_begin_round_trip("retry"));
        assert_eq!(store.current_state().last_error, None);
    }

    #[test]
    fn clones_share_state() {
        let store = TranscriptStore::new();
        let view = store.clone();
        store.set_pending(true);
        assert!(view.current_state().pending);
        assert!(!view.current_state().is_placeholder());
    }
}
