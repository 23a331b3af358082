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

use serde::{Deserialize, Serialize};

use super::{Key, KeyPress, ModifierKeysMask, SpecialKey};

/// The flat shape that some hosts deliver key events in: an optional printable
/// character, plus one flag per named key. This is lowered into a [`KeyPress`] with
/// [`KeyFlags::to_keypress`] (or [`TryFrom`]), which is what the navigator consumes.
///
/// When more than one named key flag is set, the first one in this order wins: `return`,
/// `tab`, `up`, `down`, `left`, `right`. The `shift` flag becomes a modifier on the
/// resulting key press.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct KeyFlags {
    pub input: Option<char>,
    pub up_arrow: bool,
    pub down_arrow: bool,
    pub left_arrow: bool,
    pub right_arrow: bool,
    pub tab: bool,
    pub shift: bool,
    pub return_key: bool,
}

impl KeyFlags {
    #[must_use]
    pub fn char(ch: char) -> Self {
        Self {
            input: Some(ch),
            ..Default::default()
        }
    }

    /// Returns `None` when nothing this crate understands is set.
    #[must_use]
    pub fn to_keypress(&self) -> Option<KeyPress> {
        let named_key = [
            (self.return_key, SpecialKey::Enter),
            (self.tab, SpecialKey::Tab),
            (self.up_arrow, SpecialKey::Up),
            (self.down_arrow, SpecialKey::Down),
            (self.left_arrow, SpecialKey::Left),
            (self.right_arrow, SpecialKey::Right),
        ]
        .into_iter()
        .find_map(|(is_set, special_key)| is_set.then_some(Key::SpecialKey(special_key)));

        let key = match (named_key, self.input) {
            (Some(key), _) => key,
            // Shift on a printable character is already part of the character.
            (None, Some(ch)) => {
                return Some(KeyPress::Plain {
                    key: Key::Character(ch),
                });
            }
            (None, None) => return None,
        };

        Some(if self.shift {
            KeyPress::WithModifiers {
                key,
                mask: ModifierKeysMask::new().with_shift(),
            }
        } else {
            KeyPress::Plain { key }
        })
    }
}

impl TryFrom<&KeyFlags> for KeyPress {
    type Error = ();

    fn try_from(flags: &KeyFlags) -> Result<Self, Self::Error> {
        flags.to_keypress().ok_or(())
    }
}
