//! Fire-and-forget user notification collaborator.
//!
//! The engine never depends on this; the service forwards outcome
//! messages here so a UI shell can surface them as toasts. Sinks must not
//! block and must not fail.

use log::info;

/// Visual weight of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
}

impl Severity {
    fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

/// Consumer of user-facing status messages.
pub trait NotificationSink {
    fn notify(&self, severity: Severity, message: &str);
}

/// Default sink: routes messages into the log stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, severity: Severity, message: &str) {
        info!(
            "event=user_notice module=notify severity={} message={message}",
            severity.as_str()
        );
    }
}

/// Sink that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _severity: Severity, _message: &str) {}
}
