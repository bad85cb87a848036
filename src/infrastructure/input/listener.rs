//! Global key-release listener

use std::io;
use std::thread::{self, JoinHandle};

use rdev::{Event, EventType};
use tracing::error;

/// Subscribe to OS key-release events.
///
/// `rdev::listen` blocks its thread for the process lifetime, so the
/// callback runs on a dedicated listener thread, never on the runtime.
/// The callback must stay cheap: it shares the thread with event
/// delivery for the whole desktop.
pub fn spawn_key_release_listener<F>(mut on_release: F) -> io::Result<JoinHandle<()>>
where
    F: FnMut(rdev::Key) + Send + 'static,
{
    thread::Builder::new()
        .name("key-listener".to_string())
        .spawn(move || {
            if let Err(err) = rdev::listen(move |event: Event| {
                if let EventType::KeyRelease(key) = event.event_type {
                    on_release(key);
                }
            }) {
                error!(?err, "global key listener stopped");
            }
        })
}
