//! User-facing notification sinks.
//!
//! The cart store reports every failed mutation here as a short,
//! display-ready message. Delivery is fire-and-forget: implementations must
//! not block and their outcome is never consumed.

use std::sync::{Arc, Mutex};

/// Fire-and-forget sink for user-facing failure messages.
pub trait Notifier {
    /// Report a user-facing error message.
    fn error(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Notifier that forwards messages to the `tracing` error stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Notifier that buffers messages for an embedding UI (or test) to drain.
#[derive(Debug, Default)]
pub struct BufferedNotifier {
    messages: Mutex<Vec<String>>,
}

impl BufferedNotifier {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return all buffered messages, oldest first.
    pub fn drain(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|mut messages| messages.drain(..).collect())
            .unwrap_or_default()
    }

    /// Snapshot of the buffered messages without draining them.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Notifier for BufferedNotifier {
    fn error(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_notifier_collects_in_order() {
        let notifier = BufferedNotifier::new();
        notifier.error("first");
        notifier.error("second");

        assert_eq!(notifier.messages(), vec!["first", "second"]);
        assert_eq!(notifier.drain(), vec!["first", "second"]);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn test_arc_notifier_delegates() {
        let notifier = Arc::new(BufferedNotifier::new());
        let sink: &dyn Notifier = &notifier;
        sink.error("shared");
        assert_eq!(notifier.messages(), vec!["shared"]);
    }
}
