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

use super::{BoundaryPolicy, Direction};
use crate::{Key, KeyPress, SpecialKey};

/// What a key press means to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputClass {
    Previous(BoundaryPolicy),
    Next(BoundaryPolicy),
    /// Slot in the visible window, `0` based (the `1` key selects slot `0`).
    DirectSelect(usize),
    Confirm,
}

/// Returns `None` for keys the navigator does not care about.
///
/// | Key                          | Class                   |
/// | ---------------------------- | ----------------------- |
/// | `k`                          | `Previous(Clamp)`       |
/// | `j`                          | `Next(Clamp)`           |
/// | `1` to `9`                   | `DirectSelect(d - 1)`   |
/// | `Shift+Tab`, `BackTab`       | `Previous(Wrap)`        |
/// | `Tab`                        | `Next(Wrap)`            |
/// | `Up` (column), `Left` (row)  | `Previous(Clamp)`       |
/// | `Down` (column), `Right` (row) | `Next(Clamp)`         |
/// | `Enter`                      | `Confirm`               |
///
/// Printable characters only count when no modifier is held (so `Ctrl+j` is ignored).
/// Named keys ignore modifiers, except for `Shift` on `Tab`.
#[must_use]
pub fn classify(key_press: &KeyPress, direction: Direction) -> Option<InputClass> {
    let mask = key_press.mask();
    match key_press.key() {
        Key::Character(ch) if mask.is_empty() => classify_character(ch),
        Key::Character(_) => None,
        Key::SpecialKey(special_key) => {
            classify_special_key(special_key, mask.is_shift_pressed(), direction)
        }
    }
}

fn classify_character(ch: char) -> Option<InputClass> {
    match ch {
        'k' => Some(InputClass::Previous(BoundaryPolicy::Clamp)),
        'j' => Some(InputClass::Next(BoundaryPolicy::Clamp)),
        '1'..='9' => ch
            .to_digit(10)
            .map(|digit| InputClass::DirectSelect(digit as usize - 1)),
        _ => None,
    }
}

fn classify_special_key(
    special_key: SpecialKey,
    is_shift_pressed: bool,
    direction: Direction,
) -> Option<InputClass> {
    match special_key {
        SpecialKey::BackTab => Some(InputClass::Previous(BoundaryPolicy::Wrap)),
        SpecialKey::Tab if is_shift_pressed => {
            Some(InputClass::Previous(BoundaryPolicy::Wrap))
        }
        SpecialKey::Tab => Some(InputClass::Next(BoundaryPolicy::Wrap)),
        SpecialKey::Enter => Some(InputClass::Confirm),
        it if it == direction.previous_arrow() => {
            Some(InputClass::Previous(BoundaryPolicy::Clamp))
        }
        it if it == direction.next_arrow() => Some(InputClass::Next(BoundaryPolicy::Clamp)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{ModifierKeysMask, assert_eq2, keypress};

    #[test_case(keypress!(@char 'k'), Some(InputClass::Previous(BoundaryPolicy::Clamp)))]
    #[test_case(keypress!(@char 'j'), Some(InputClass::Next(BoundaryPolicy::Clamp)))]
    #[test_case(keypress!(@char 'J'), None ; "upper case j")]
    #[test_case(keypress!(@char ModifierKeysMask::new().with_ctrl(), 'j'), None ; "ctrl j")]
    #[test_case(keypress!(@char '1'), Some(InputClass::DirectSelect(0)))]
    #[test_case(keypress!(@char '9'), Some(InputClass::DirectSelect(8)))]
    #[test_case(keypress!(@char '0'), None)]
    #[test_case(keypress!(@char 'x'), None)]
    #[test_case(keypress!(@special SpecialKey::Tab), Some(InputClass::Next(BoundaryPolicy::Wrap)))]
    #[test_case(
        keypress!(@special ModifierKeysMask::new().with_shift(), SpecialKey::Tab),
        Some(InputClass::Previous(BoundaryPolicy::Wrap)) ;
        "shift tab"
    )]
    #[test_case(
        keypress!(@special SpecialKey::BackTab),
        Some(InputClass::Previous(BoundaryPolicy::Wrap))
    )]
    #[test_case(
        keypress!(@special ModifierKeysMask::new().with_shift(), SpecialKey::BackTab),
        Some(InputClass::Previous(BoundaryPolicy::Wrap)) ;
        "backtab with shift"
    )]
    #[test_case(keypress!(@special SpecialKey::Enter), Some(InputClass::Confirm))]
    #[test_case(keypress!(@special SpecialKey::Esc), None)]
    fn test_classify_any_direction(key_press: KeyPress, expected: Option<InputClass>) {
        assert_eq2!(classify(&key_press, Direction::Column), expected);
        assert_eq2!(classify(&key_press, Direction::Row), expected);
    }

    #[test_case(Direction::Column, SpecialKey::Up, Some(InputClass::Previous(BoundaryPolicy::Clamp)))]
    #[test_case(Direction::Column, SpecialKey::Down, Some(InputClass::Next(BoundaryPolicy::Clamp)))]
    #[test_case(Direction::Column, SpecialKey::Left, None)]
    #[test_case(Direction::Column, SpecialKey::Right, None)]
    #[test_case(Direction::Row, SpecialKey::Left, Some(InputClass::Previous(BoundaryPolicy::Clamp)))]
    #[test_case(Direction::Row, SpecialKey::Right, Some(InputClass::Next(BoundaryPolicy::Clamp)))]
    #[test_case(Direction::Row, SpecialKey::Up, None)]
    #[test_case(Direction::Row, SpecialKey::Down, None)]
    fn test_classify_arrows(
        direction: Direction,
        special_key: SpecialKey,
        expected: Option<InputClass>,
    ) {
        assert_eq2!(classify(&keypress!(@special special_key), direction), expected);
    }

    #[test]
    fn test_arrows_ignore_modifiers() {
        let shift_down = keypress!(@special ModifierKeysMask::new().with_shift(), SpecialKey::Down);
        assert_eq2!(
            classify(&shift_down, Direction::Column),
            Some(InputClass::Next(BoundaryPolicy::Clamp))
        );
    }
}
