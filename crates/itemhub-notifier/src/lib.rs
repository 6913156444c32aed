//! # itemhub-notifier
//!
//! Sends an email describing every completed item mutation. Delivery is
//! best effort: failures are logged inside the notifier and never reach the
//! caller.

pub mod brevo;
pub mod noop;
pub mod notifier;
pub mod template;

pub use brevo::BrevoNotifier;
pub use noop::NoopNotifier;
pub use notifier::{Notifier, build_notifier};
pub use template::EmailMessage;
