//! Config key names to OS key codes

use std::collections::{BTreeMap, HashMap};

use rdev::Key;
use tracing::warn;

use crate::domain::language::Language;

/// Parse a config-file key name into an rdev key code.
///
/// Names are case-insensitive. Modifier names without a side default to
/// the left key.
pub fn parse_key_name(name: &str) -> Option<Key> {
    let key = match name.trim().to_lowercase().as_str() {
        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,
        "a" => Key::KeyA,
        "b" => Key::KeyB,
        "c" => Key::KeyC,
        "d" => Key::KeyD,
        "e" => Key::KeyE,
        "f" => Key::KeyF,
        "g" => Key::KeyG,
        "h" => Key::KeyH,
        "i" => Key::KeyI,
        "j" => Key::KeyJ,
        "k" => Key::KeyK,
        "l" => Key::KeyL,
        "m" => Key::KeyM,
        "n" => Key::KeyN,
        "o" => Key::KeyO,
        "p" => Key::KeyP,
        "q" => Key::KeyQ,
        "r" => Key::KeyR,
        "s" => Key::KeyS,
        "t" => Key::KeyT,
        "u" => Key::KeyU,
        "v" => Key::KeyV,
        "w" => Key::KeyW,
        "x" => Key::KeyX,
        "y" => Key::KeyY,
        "z" => Key::KeyZ,
        "0" => Key::Num0,
        "1" => Key::Num1,
        "2" => Key::Num2,
        "3" => Key::Num3,
        "4" => Key::Num4,
        "5" => Key::Num5,
        "6" => Key::Num6,
        "7" => Key::Num7,
        "8" => Key::Num8,
        "9" => Key::Num9,
        "space" => Key::Space,
        "tab" => Key::Tab,
        "escape" | "esc" => Key::Escape,
        "caps_lock" | "capslock" => Key::CapsLock,
        "ctrl" | "ctrl_left" => Key::ControlLeft,
        "ctrl_right" => Key::ControlRight,
        "alt" | "alt_left" => Key::Alt,
        "alt_right" | "altgr" => Key::AltGr,
        "shift" | "shift_left" => Key::ShiftLeft,
        "shift_right" => Key::ShiftRight,
        "meta" | "super" | "meta_left" => Key::MetaLeft,
        "meta_right" => Key::MetaRight,
        _ => return None,
    };
    Some(key)
}

/// Resolve a config bindings table into detector bindings.
///
/// Entries with an unknown key name or language are skipped with a
/// warning rather than failing startup.
pub fn resolve_bindings(config_bindings: &BTreeMap<String, String>) -> HashMap<Key, Language> {
    let mut bindings = HashMap::new();

    for (key_name, language_name) in config_bindings {
        let Some(key) = parse_key_name(key_name) else {
            warn!(key = %key_name, "ignoring binding with unknown key name");
            continue;
        };
        let language: Language = match language_name.parse() {
            Ok(language) => language,
            Err(err) => {
                warn!(key = %key_name, %err, "ignoring binding");
                continue;
            }
        };
        bindings.insert(key, language);
    }

    bindings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_function_keys() {
        assert_eq!(parse_key_name("f6"), Some(Key::F6));
        assert_eq!(parse_key_name("F12"), Some(Key::F12));
    }

    #[test]
    fn parses_letters_and_digits() {
        assert_eq!(parse_key_name("v"), Some(Key::KeyV));
        assert_eq!(parse_key_name("3"), Some(Key::Num3));
    }

    #[test]
    fn parses_modifiers_with_left_default() {
        assert_eq!(parse_key_name("ctrl"), Some(Key::ControlLeft));
        assert_eq!(parse_key_name("shift_right"), Some(Key::ShiftRight));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(parse_key_name("hyper"), None);
        assert_eq!(parse_key_name(""), None);
    }

    #[test]
    fn resolve_bindings_maps_valid_entries() {
        let config = BTreeMap::from([
            ("f6".to_string(), "vi".to_string()),
            ("f7".to_string(), "English".to_string()),
        ]);

        let bindings = resolve_bindings(&config);
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.get(&Key::F6).map(|l| l.code()), Some("vi"));
        assert_eq!(bindings.get(&Key::F7).map(|l| l.code()), Some("en"));
    }

    #[test]
    fn resolve_bindings_skips_invalid_entries() {
        let config = BTreeMap::from([
            ("notakey".to_string(), "vi".to_string()),
            ("f6".to_string(), "klingon".to_string()),
            ("f7".to_string(), "ja".to_string()),
        ]);

        let bindings = resolve_bindings(&config);
        assert_eq!(bindings.len(), 1);
        assert!(bindings.contains_key(&Key::F7));
    }
}
