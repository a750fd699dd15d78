//! Responder options, fixed when the handler is registered

/// Responder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Emit `RequestID:  <id> , Lambda triggered!` for every invocation carrying a request id
    pub log_request_id: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config { log_request_id: true }
    }
}

impl Config {
    /// Configuration that never logs the request id
    pub fn quiet() -> Self {
        Config { log_request_id: false }
    }
}
