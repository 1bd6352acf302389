#[cfg(feature = "http")]
pub mod http;

use crate::errors::ChatError;

/// The backend chat endpoint as the controller sees it: one user message in,
/// an ordered list of reply texts out.
///
/// Futures are not required to be `Send` so browser fetch implementations
/// can satisfy the trait.
#[allow(async_fn_in_trait)]
pub trait ChatBackend {
    async fn chat(&self, message: &str) -> Result<Vec<String>, ChatError>;
}
