//! Chat interaction core for the Contoso Outdoors assistant: an append-only
//! transcript store and the controller that runs each round trip to the
//! backend chat endpoint.

pub mod backend;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod format;
pub mod models;
pub mod service;
pub mod store;

pub use backend::ChatBackend;
#[cfg(feature = "http")]
pub use backend::http::HttpChatBackend;
pub use config::ChatConfig;
pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use errors::ChatError;
pub use models::{Message, Role};
pub use service::chat_controller::{ChatController, SendOutcome};
pub use store::transcript_store::{TranscriptSnapshot, TranscriptStore};
