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

use crate::SpecialKey;

/// Layout axis of the list. It decides which arrow keys move the highlight, and whether
/// dividers are drawn between items.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Items laid out left to right. `Left` / `Right` navigate, dividers are drawn.
    Row,
    /// Items stacked top to bottom. `Up` / `Down` navigate.
    #[default]
    Column,
}

impl Direction {
    /// The arrow key that moves the highlight towards the start of the window.
    #[must_use]
    pub fn previous_arrow(self) -> SpecialKey {
        match self {
            Direction::Row => SpecialKey::Left,
            Direction::Column => SpecialKey::Up,
        }
    }

    /// The arrow key that moves the highlight towards the end of the window.
    #[must_use]
    pub fn next_arrow(self) -> SpecialKey {
        match self {
            Direction::Row => SpecialKey::Right,
            Direction::Column => SpecialKey::Down,
        }
    }

    #[must_use]
    pub fn has_dividers(self) -> bool { matches!(self, Direction::Row) }
}
