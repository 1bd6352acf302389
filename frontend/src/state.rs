use contoso_chat::{ChatController, Message, TranscriptStore};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ConsoleDiagnostics, GlooChatBackend};

/// Shared application state, provided via Leptos context.
///
/// The transcript store is the source of truth; the signals mirror its
/// latest snapshot so components re-render on every committed change.
#[derive(Clone)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub messages: ReadSignal<Vec<Message>>,
    pub pending: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,

    controller: ChatController<GlooChatBackend, ConsoleDiagnostics>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let store = TranscriptStore::new();
        let initial = store.current_state();

        let (messages, set_messages) = signal(initial.messages);
        let (pending, set_pending) = signal(initial.pending);
        let (error, set_error) = signal(initial.last_error);

        let mut updates = store.subscribe();
        spawn_local(async move {
            while updates.changed().await.is_ok() {
                let snapshot = updates.borrow_and_update().clone();
                set_messages.set(snapshot.messages);
                set_pending.set(snapshot.pending);
                set_error.set(snapshot.last_error);
            }
        });

        let state = Self {
            messages,
            pending,
            error,
            controller: ChatController::new(store, GlooChatBackend::default(), ConsoleDiagnostics),
        };

        provide_context(state.clone());
        state
    }

    /// Send a message; the transcript updates through the signals above.
    pub fn send_message(&self, text: String) {
        let controller = self.controller.clone();
        spawn_local(async move {
            let outcome = controller.send_message(&text).await;
            log::debug!("Chat send finished: {outcome:?}");
        });
    }
}
