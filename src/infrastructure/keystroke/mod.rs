//! Copy-shortcut adapters

mod enigo;

pub use self::enigo::EnigoCopyKeystroke;
