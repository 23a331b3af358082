/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Human readable key specs, eg: `down`, `shift+tab`, `ctrl+j`, `3`. A key script is a
//! whitespace separated list of key specs, eg: `"down down tab enter"`.

use std::str::FromStr;

use super::{Key, KeyPress, KeyState, ModifierKeysMask, SpecialKey};
use crate::KeySpecParseError;

/// Parse a single key spec. Names and modifiers are case insensitive. A spec that is a
/// single character is always that character (so `+` and `K` work as expected).
///
/// # Errors
///
/// Returns [`KeySpecParseError`] if the string is empty, or it names a key or a modifier
/// that is not known.
pub fn parse_key_spec(spec: &str) -> Result<KeyPress, KeySpecParseError> {
    let spec = spec.trim();

    let mut chars = spec.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return Err(KeySpecParseError::Empty),
        (Some(ch), None) => {
            return Ok(KeyPress::Plain {
                key: Key::Character(ch),
            });
        }
        _ => {}
    }

    let mut parts: Vec<&str> = spec.split('+').collect();
    let name = parts.pop().unwrap_or_default();

    let mut mask = ModifierKeysMask::new();
    for modifier in parts {
        mask = match modifier.to_ascii_lowercase().as_str() {
            "shift" => mask.with_shift(),
            "ctrl" | "control" => mask.with_ctrl(),
            "alt" | "meta" => mask.with_alt(),
            _ => {
                return Err(KeySpecParseError::UnknownModifier {
                    modifier: modifier.to_string(),
                    spec: spec.to_string(),
                });
            }
        };
    }

    let mut key = parse_key_name(name)?;

    // Same folding as the crossterm conversion: shift is part of a printable character.
    if let Key::Character(ch) = key
        && mask.is_shift_pressed()
    {
        mask.shift_key_state = KeyState::NotPressed;
        key = Key::Character(ch.to_ascii_uppercase());
    }

    Ok(if mask.is_empty() {
        KeyPress::Plain { key }
    } else {
        KeyPress::WithModifiers { key, mask }
    })
}

fn parse_key_name(name: &str) -> Result<Key, KeySpecParseError> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(Key::Character(ch));
    }

    let special_key = match name.to_ascii_lowercase().as_str() {
        "" => return Err(KeySpecParseError::Empty),
        "space" => return Ok(Key::Character(' ')),
        "up" => SpecialKey::Up,
        "down" => SpecialKey::Down,
        "left" => SpecialKey::Left,
        "right" => SpecialKey::Right,
        "tab" => SpecialKey::Tab,
        "backtab" => SpecialKey::BackTab,
        "enter" | "return" => SpecialKey::Enter,
        "esc" | "escape" => SpecialKey::Esc,
        "backspace" => SpecialKey::Backspace,
        "home" => SpecialKey::Home,
        "end" => SpecialKey::End,
        "pageup" => SpecialKey::PageUp,
        "pagedown" => SpecialKey::PageDown,
        "delete" | "del" => SpecialKey::Delete,
        _ => {
            return Err(KeySpecParseError::UnknownKey {
                name: name.to_string(),
            });
        }
    };

    Ok(Key::SpecialKey(special_key))
}

/// Parse a whitespace separated list of key specs. An empty script yields an empty
/// `Vec`.
///
/// # Errors
///
/// Returns the error for the first key spec that does not parse.
pub fn parse_key_script(script: &str) -> Result<Vec<KeyPress>, KeySpecParseError> {
    script.split_whitespace().map(parse_key_spec).collect()
}

impl FromStr for KeyPress {
    type Err = KeySpecParseError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> { parse_key_spec(spec) }
}
