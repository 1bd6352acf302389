use tracing::{debug, warn};

use crate::backend::ChatBackend;
use crate::diagnostics::Diagnostics;
use crate::errors::ChatError;
use crate::store::transcript_store::TranscriptStore;

/// What a single `send_message` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was blank after trimming; nothing changed, nothing was sent.
    Ignored,
    /// A round trip was already outstanding; nothing changed, nothing was sent.
    Busy,
    /// The backend answered and `replies` system messages were appended.
    Fulfilled { replies: usize },
    /// The round trip failed; only the user message was appended.
    Failed(ChatError),
}

/// Holds the pending flag for one round trip and lowers it on every exit
/// path, including a dropped future.
struct PendingGuard<'a> {
    store: &'a TranscriptStore,
    released: bool,
}

impl<'a> PendingGuard<'a> {
    fn acquire(store: &'a TranscriptStore, user_content: &str) -> Option<Self> {
        store
            .try_begin_round_trip(user_content)
            .then(|| Self { store, released: false })
    }

    fn fulfil(mut self, replies: Vec<String>) {
        self.released = true;
        self.store.finish_round_trip(replies, None);
    }

    fn fail(mut self, err: &ChatError) {
        self.released = true;
        self.store.finish_round_trip(Vec::new(), Some(err.to_string()));
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.released {
            self.store.set_pending(false);
        }
    }
}

/// Drives the request lifecycle for one conversation:
/// `Idle → AwaitingResponse → (Fulfilled | Failed) → Idle`.
#[derive(Clone)]
pub struct ChatController<B, D> {
    store: TranscriptStore,
    backend: B,
    diagnostics: D,
}

impl<B, D> ChatController<B, D>
where
    B: ChatBackend,
    D: Diagnostics,
{
    pub fn new(store: TranscriptStore, backend: B, diagnostics: D) -> Self {
        Self { store, backend, diagnostics }
    }

    pub fn store(&self) -> &TranscriptStore {
        &self.store
    }

    /// Sends one user turn to the backend and folds the replies into the
    /// transcript.
    ///
    /// Replies are all-or-nothing: on any failure no system message is
    /// appended, the error goes to diagnostics and into `last_error`.
    /// Pending is always lowered before this returns.
    pub async fn send_message(&self, raw_input: &str) -> SendOutcome {
        let text = raw_input.trim();
        if text.is_empty() {
            debug!("Ignoring blank chat input");
            return SendOutcome::Ignored;
        }

        let Some(guard) = PendingGuard::acquire(&self.store, text) else {
            warn!("Chat request already in flight; rejecting new message");
            return SendOutcome::Busy;
        };

        debug!("Chat round trip started");
        match self.backend.chat(text).await {
            Ok(replies) => {
                let count = replies.len();
                guard.fulfil(replies);
                debug!("Chat round trip fulfilled with {count} replies");
                SendOutcome::Fulfilled { replies: count }
            }
            Err(err) => {
                self.diagnostics.report(&err);
                guard.fail(&err);
                SendOutcome::Failed(err)
            }
        }
    }
}
