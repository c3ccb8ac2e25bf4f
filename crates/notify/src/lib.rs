//! `trolley-notify` — the user-facing error notification sink.
//!
//! Fire-and-forget: the engine calls [`Notifier::notify_error`] exactly once
//! per failed operation attempt and never waits on or inspects the result.

pub mod messages;
pub mod notifier;

pub use notifier::{Notifier, RecordingNotifier, TracingNotifier};
