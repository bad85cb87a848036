//! Input event source adapters

mod keymap;
mod listener;

pub use keymap::{parse_key_name, resolve_bindings};
pub use listener::spawn_key_release_listener;
