use std::sync::Mutex;

/// Sink for short, human-readable error messages.
///
/// No return value and no structured payload: the engine surfaces structured
/// errors to its caller separately, this channel only carries what a user
/// should see.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify_error(&self, message: &str) {
        (**self).notify_error(message);
    }
}

/// Notifier that forwards messages to the tracing pipeline.
///
/// A real frontend would swap in a toast/banner implementation; headless
/// deployments get the message in the logs.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::error!(target: "trolley::user", "{message}");
    }
}

/// Notifier that records every message (test double).
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_keeps_messages_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify_error("first");
        notifier.notify_error("second");

        assert_eq!(notifier.messages(), vec!["first", "second"]);

        notifier.clear();
        assert!(notifier.messages().is_empty());
    }
}
