use serde::{Deserialize, Serialize};

/// Speaker of a transcript entry. `System` is anything the backend produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::System => "System",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of the conversation. Content is untrusted text and only ever
/// goes through [`crate::format`] before display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// Request body for `POST /chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Response body from `POST /chat`: one entry per system reply, in order.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_single_field() {
        let body = serde_json::to_value(ChatRequest::new("hi")).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "hi" }));
    }

    #[test]
    fn chat_response_rejects_wrong_shapes() {
        assert!(serde_json::from_str::<ChatResponse>(r#"{"reply":"x"}"#).is_err());
        assert!(serde_json::from_str::<ChatResponse>(r#"{"messages":[1,2]}"#).is_err());
        assert!(serde_json::from_str::<ChatResponse>(r#"{"messages":null}"#).is_err());

        let ok: ChatResponse = serde_json::from_str(r#"{"messages":[]}"#).unwrap();
        assert!(ok.messages.is_empty());
    }
}
