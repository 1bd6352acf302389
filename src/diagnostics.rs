use tracing::error;

use crate::errors::ChatError;

/// Sink for failed round trips. Fire-and-forget: reporting never fails and
/// never feeds back into the conversation.
pub trait Diagnostics {
    fn report(&self, error: &ChatError);
}

/// Reports through `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, err: &ChatError) {
        error!(
            transport = err.is_transport(),
            status = err.is_status(),
            malformed = err.is_malformed(),
            "Error while processing chat: {err}"
        );
    }
}
