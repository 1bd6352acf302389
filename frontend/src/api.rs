use contoso_chat::models::{ChatRequest, ChatResponse};
use contoso_chat::{ChatBackend, ChatError, Diagnostics};
use gloo_net::http::Request;

/// Same-origin path of the backend chat endpoint.
const CHAT_PATH: &str = "/chat";

/// [`ChatBackend`] over the browser's fetch API.
#[derive(Clone)]
pub struct GlooChatBackend {
    endpoint: String,
}

impl Default for GlooChatBackend {
    fn default() -> Self {
        Self { endpoint: CHAT_PATH.to_string() }
    }
}

impl ChatBackend for GlooChatBackend {
    async fn chat(&self, message: &str) -> Result<Vec<String>, ChatError> {
        let resp = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&ChatRequest::new(message))
            .map_err(|e| ChatError::transport(format!("Serialize error: {e}")))?
            .send()
            .await
            .map_err(|e| ChatError::transport(e.to_string()))?;

        if !resp.ok() {
            return Err(ChatError::Status { status: resp.status() });
        }

        resp.json::<ChatResponse>()
            .await
            .map(|body| body.messages)
            .map_err(|e| ChatError::malformed(e.to_string()))
    }
}

/// Reports failed round trips to the browser console.
#[derive(Clone, Copy)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn report(&self, error: &ChatError) {
        log::error!("Error while processing chat: {error}");
    }
}

#[cfg(test)]
mod tests {
    use std::pin::pin;
    use std::sync::Mutex;
    use std::task::{Context, Poll, Waker};

    use contoso_chat::{ChatController, SendOutcome, TranscriptStore};

    use super::*;

    static RECORDS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());

    struct RecordingLogger;

    impl log::Log for RecordingLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            RECORDS
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    #[test]
    fn busy_rejection_reaches_the_log_facade() {
        log::set_logger(&RecordingLogger).unwrap();
        log::set_max_level(log::LevelFilter::Trace);

        let store = TranscriptStore::new();
        assert!(store.try_begin_round_trip("in flight"));
        let controller = ChatController::new(store, GlooChatBackend::default(), ConsoleDiagnostics);

        // A busy rejection returns before any await, so one poll settles it.
        let send = pin!(controller.send_message("second"));
        let mut cx = Context::from_waker(Waker::noop());
        assert_eq!(send.poll(&mut cx), Poll::Ready(SendOutcome::Busy));

        let records = RECORDS.lock().unwrap();
        assert!(
            records
                .iter()
                .any(|(level, msg)| *level == log::Level::Warn && msg.contains("already in flight")),
            "{records:?}"
        );
    }
}
