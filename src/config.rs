use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_CHAT_PATH: &str = "/chat";

/// Where the backend chat endpoint lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub base_url: String,
    pub chat_path: String,
    /// `None` (the default) waits for the backend indefinitely, as the
    /// controller itself never times out. Only the terminal client sets this,
    /// and only when `CHAT_TIMEOUT_SECS` is given.
    pub request_timeout: Option<Duration>,
}

impl ChatConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            request_timeout: None,
        }
    }

    pub fn with_chat_path(mut self, chat_path: impl Into<String>) -> Self {
        self.chat_path = chat_path.into();
        self
    }

    /// Reads `CHAT_BASE_URL`, `CHAT_PATH` and `CHAT_TIMEOUT_SECS`.
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("CHAT_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let chat_path = lookup("CHAT_PATH").unwrap_or_else(|| DEFAULT_CHAT_PATH.to_string());
        let request_timeout = lookup("CHAT_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Self { base_url, chat_path, request_timeout }
    }

    /// Base URL and path joined with exactly one `/`.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.chat_path.trim_start_matches('/')
        )
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ChatConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ChatConfig::default());
        assert_eq!(config.endpoint(), "http://localhost:5000/chat");
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn reads_overrides() {
        let config = ChatConfig::from_lookup(lookup_from(&[
            ("CHAT_BASE_URL", "https://shop.example.com/"),
            ("CHAT_PATH", "api/chat"),
            ("CHAT_TIMEOUT_SECS", "30"),
        ]));
        assert_eq!(config.endpoint(), "https://shop.example.com/api/chat");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn ignores_unusable_timeouts() {
        for raw in ["zero", "0", "-5", ""] {
            let config = ChatConfig::from_lookup(lookup_from(&[("CHAT_TIMEOUT_SECS", raw)]));
            assert_eq!(config.request_timeout, None, "timeout {raw:?}");
        }
    }
}
