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

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};

use super::{ModifierKeysMask, convert_key_modifiers};

/// Examples.
///
/// ```rust
/// use r3bl_select_list::*;
///
/// let j = keypress!(@char 'j');
/// assert_eq!(j, KeyPress::Plain { key: Key::Character('j') });
///
/// let enter = keypress!(@special SpecialKey::Enter);
/// assert_eq!(enter, KeyPress::Plain { key: Key::SpecialKey(SpecialKey::Enter) });
///
/// let shift_tab = keypress!(@special ModifierKeysMask::new().with_shift(), SpecialKey::Tab);
/// assert_eq!(
///     shift_tab,
///     KeyPress::WithModifiers {
///         key: Key::SpecialKey(SpecialKey::Tab),
///         mask: ModifierKeysMask::new().with_shift(),
///     }
/// );
/// ```
#[macro_export]
macro_rules! keypress {
    // @char
    (@char $arg_char : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::Character($arg_char),
        }
    };

    (@char $arg_modifiers : expr, $arg_char : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::Character($arg_char),
        }
    };

    // @special
    (@special $arg_special : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::SpecialKey($arg_special),
        }
    };

    (@special $arg_modifiers : expr, $arg_special : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::SpecialKey($arg_special),
        }
    };
}

/// This is equivalent to [`crossterm::event::KeyEvent`] except that it is cleaned up
/// semantically and impossible states are removed. The navigator only ever sees
/// [`KeyPress`], never the backend's type.
///
/// Please use the [`keypress!`] macro instead of directly constructing this enum.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Copy)]
pub enum KeyPress {
    Plain { key: Key },
    WithModifiers { key: Key, mask: ModifierKeysMask },
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Copy)]
pub enum Key {
    /// [char] that can be printed to the console, eg: `j`, `k`, `1`, `X`.
    Character(char),
    SpecialKey(SpecialKey),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Copy)]
pub enum SpecialKey {
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    BackTab, /* Shift + Tab */
    Delete,
    Esc,
}

impl KeyPress {
    #[must_use]
    pub fn key(&self) -> Key {
        match self {
            KeyPress::Plain { key } | KeyPress::WithModifiers { key, .. } => *key,
        }
    }

    /// [`KeyPress::Plain`] has an empty mask.
    #[must_use]
    pub fn mask(&self) -> ModifierKeysMask {
        match self {
            KeyPress::Plain { .. } => ModifierKeysMask::new(),
            KeyPress::WithModifiers { mask, .. } => *mask,
        }
    }
}

/// Typecast / convert [`KeyEvent`] to [`KeyPress`].
///
/// Only [`KeyEventKind::Press`] is converted; release and repeat events (which only
/// show up in terminals that speak the kitty keyboard protocol) are dropped.
///
/// Displayable characters get special handling. Typing "X" shows up in crossterm as
/// "Shift + X". The `SHIFT` modifier is folded into the character:
///
/// ```text
/// ╔════════════════════╦═══════════════════════════════════════════╗
/// ║ User action        ║ Result                                    ║
/// ╠════════════════════╬═══════════════════════════════════════════╣
/// ║ Type "j"           ║ keypress! {@char 'j'}                     ║
/// ║ Type "J"           ║ keypress! {@char 'J'}, SHIFT is ignored   ║
/// ║ Press Ctrl + j     ║ keypress! {@char ctrl_mask, 'j'}          ║
/// ║ Press Shift + Tab  ║ keypress! {@special shift_mask, BackTab}  ║
/// ╚════════════════════╩═══════════════════════════════════════════╝
/// ```
pub mod convert_key_event {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl TryFrom<KeyEvent> for KeyPress {
        type Error = ();

        fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
            if key_event.kind != KeyEventKind::Press {
                return Err(());
            }

            match key_event {
                // If character keys, then ignore SHIFT or NONE modifiers.
                KeyEvent {
                    code: KeyCode::Char(character),
                    modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                    ..
                } => Ok(keypress! { @char character }),

                // Non character keys, or characters with Ctrl / Alt held down.
                _ => {
                    let key = copy_code_from_key_event(&key_event).ok_or(())?;
                    Ok(match convert_key_modifiers(&key_event.modifiers) {
                        Some(mask) => KeyPress::WithModifiers { key, mask },
                        None => KeyPress::Plain { key },
                    })
                }
            }
        }
    }

    fn copy_code_from_key_event(key_event: &KeyEvent) -> Option<Key> {
        Some(match key_event.code {
            KeyCode::Char(character) => Key::Character(character),
            KeyCode::Backspace => Key::SpecialKey(SpecialKey::Backspace),
            KeyCode::Enter => Key::SpecialKey(SpecialKey::Enter),
            KeyCode::Left => Key::SpecialKey(SpecialKey::Left),
            KeyCode::Right => Key::SpecialKey(SpecialKey::Right),
            KeyCode::Up => Key::SpecialKey(SpecialKey::Up),
            KeyCode::Down => Key::SpecialKey(SpecialKey::Down),
            KeyCode::Home => Key::SpecialKey(SpecialKey::Home),
            KeyCode::End => Key::SpecialKey(SpecialKey::End),
            KeyCode::PageUp => Key::SpecialKey(SpecialKey::PageUp),
            KeyCode::PageDown => Key::SpecialKey(SpecialKey::PageDown),
            KeyCode::Tab => Key::SpecialKey(SpecialKey::Tab),
            KeyCode::BackTab => Key::SpecialKey(SpecialKey::BackTab),
            KeyCode::Delete => Key::SpecialKey(SpecialKey::Delete),
            KeyCode::Esc => Key::SpecialKey(SpecialKey::Esc),
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_plain_character() {
        let it = KeyPress::try_from(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert_eq2!(it, Ok(keypress!(@char 'j')));
    }

    #[test]
    fn test_shift_is_folded_into_character() {
        let it = KeyPress::try_from(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT));
        assert_eq2!(it, Ok(keypress!(@char 'K')));
    }

    #[test]
    fn test_ctrl_character_keeps_mask() {
        let it =
            KeyPress::try_from(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL));
        assert_eq2!(it, Ok(keypress!(@char ModifierKeysMask::new().with_ctrl(), 'j')));
    }

    #[test]
    fn test_shift_tab_arrives_as_backtab() {
        let it = KeyPress::try_from(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq2!(
            it,
            Ok(keypress!(@special ModifierKeysMask::new().with_shift(), SpecialKey::BackTab))
        );
    }

    #[test]
    fn test_arrow_without_modifiers_is_plain() {
        let it = KeyPress::try_from(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq2!(it, Ok(keypress!(@special SpecialKey::Down)));
    }

    #[test]
    fn test_release_events_are_dropped() {
        let it = KeyPress::try_from(KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));
        assert_eq2!(it, Err(()));
    }

    #[test]
    fn test_unsupported_key_code() {
        let it = KeyPress::try_from(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
        assert_eq2!(it, Err(()));
    }

    #[test]
    fn test_key_and_mask_accessors() {
        let it = keypress!(@special ModifierKeysMask::new().with_alt(), SpecialKey::Up);
        assert_eq2!(it.key(), Key::SpecialKey(SpecialKey::Up));
        assert_eq2!(it.mask(), ModifierKeysMask::new().with_alt());
        assert!(keypress!(@char 'x').mask().is_empty());
    }
}
