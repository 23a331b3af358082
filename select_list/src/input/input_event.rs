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

use crossterm::event::Event;

use super::KeyPress;

/// Input events that a host can forward to a [`crate::Navigator`].
///
/// ```text
/// crossterm::Event
///     ├─→ Event::Key(KeyEvent)  → KeyPress   → InputEvent::Keyboard
///     ├─→ Event::Resize(w, h)                → InputEvent::Resize
///     └─→ Event::Focus*         → FocusEvent → InputEvent::Focus
/// ```
///
/// Only [`InputEvent::Keyboard`] drives the navigator. Everything else propagates back to
/// the host untouched.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(KeyPress),
    Resize { col_count: u16, row_count: u16 },
    Focus(FocusEvent),
}

/// Terminal window focus changes. This is not the same as the navigator's own
/// `is_focused` gate, which the host owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    Gained,
    Lost,
}

mod helpers {
    use super::{InputEvent, KeyPress};

    impl From<KeyPress> for InputEvent {
        fn from(key_press: KeyPress) -> Self { InputEvent::Keyboard(key_press) }
    }
}

pub mod converters {
    use super::{Event, FocusEvent, InputEvent, KeyPress};

    /// Mouse and paste events, as well as non-press key events, have no meaning for a
    /// select list and are rejected.
    impl TryFrom<Event> for InputEvent {
        type Error = ();

        fn try_from(event: Event) -> Result<Self, Self::Error> {
            match event {
                Event::Key(key_event) => {
                    Ok(InputEvent::Keyboard(KeyPress::try_from(key_event)?))
                }
                Event::Resize(col_count, row_count) => Ok(InputEvent::Resize {
                    col_count,
                    row_count,
                }),
                Event::FocusGained => Ok(InputEvent::Focus(FocusEvent::Gained)),
                Event::FocusLost => Ok(InputEvent::Focus(FocusEvent::Lost)),
                Event::Mouse(_) | Event::Paste(_) => Err(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::{SpecialKey, assert_eq2, keypress};

    #[test]
    fn test_convert_key_event() {
        let event = Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq2!(
            InputEvent::try_from(event),
            Ok(InputEvent::Keyboard(keypress!(@special SpecialKey::Tab)))
        );
    }

    #[test]
    fn test_convert_resize_and_focus() {
        assert_eq2!(
            InputEvent::try_from(Event::Resize(80, 24)),
            Ok(InputEvent::Resize {
                col_count: 80,
                row_count: 24
            })
        );
        assert_eq2!(
            InputEvent::try_from(Event::FocusLost),
            Ok(InputEvent::Focus(FocusEvent::Lost))
        );
    }

    #[test]
    fn test_paste_is_rejected() {
        assert_eq2!(InputEvent::try_from(Event::Paste("abc".into())), Err(()));
    }

    #[test]
    fn test_from_keypress() {
        assert_eq2!(
            InputEvent::from(keypress!(@char 'j')),
            InputEvent::Keyboard(keypress!(@char 'j'))
        );
    }
}
