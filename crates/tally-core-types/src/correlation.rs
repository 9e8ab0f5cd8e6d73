//! Correlation types for request tracking
//!
//! Every line handed to the dispatcher gets its own `RequestId` so that the
//! start/end events of one command can be grouped in structured logs.

use uuid::Uuid;

/// Unique identifier for a single dispatched line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new time-ordered RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Correlation data for one dispatched line
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
    /// Name the line invoked, once parsed; `None` for blank lines
    pub command: Option<String>,
}

impl RequestContext {
    /// Create a context with a fresh RequestId and no command yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the parsed command name
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}
