use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient banner raised after a submission attempt. Visibility only:
/// dismissing one never touches field values or validation state.
#[derive(Debug, Clone)]
pub struct Notification {
    severity: Severity,
    message: String,
    raised_at: Instant,
}

impl Notification {
    pub(crate) fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True once the auto-dismiss interval has elapsed at `now`
    pub fn expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.raised_at) >= ttl
    }
}
