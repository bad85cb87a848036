//! Notification adapters

mod notify_rust;

pub use self::notify_rust::NotifyRustNotifier;
