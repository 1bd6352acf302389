use thiserror::Error;

/// Failure of a single round trip to the backend chat endpoint.
/// All variants carry a human-readable message for display/logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    // ── Transport errors ─────────────────────────────────────────────────────
    #[error("Network error: {message}")]
    Transport { message: String },

    #[error("Server error: status {status}")]
    Status { status: u16 },

    // ── Response errors ──────────────────────────────────────────────────────
    #[error("Malformed chat response: {message}")]
    MalformedResponse { message: String },
}

impl ChatError {
    pub fn transport(message: impl Into<String>) -> Self {
        ChatError::Transport { message: message.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ChatError::MalformedResponse { message: message.into() }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ChatError::Transport { .. })
    }

    pub fn is_status(&self) -> bool {
        matches!(self, ChatError::Status { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, ChatError::MalformedResponse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            ChatError::Status { status: 500 }.to_string(),
            "Server error: status 500"
        );
        assert_eq!(
            ChatError::transport("connection refused").to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn classification() {
        assert!(ChatError::Status { status: 404 }.is_status());
        assert!(ChatError::malformed("eof").is_malformed());
        assert!(!ChatError::malformed("eof").is_transport());
    }
}
