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

use super::{Item, is_same_identity_sequence, limit_applies, window_size};

/// The whole of the navigator's mutable state. Every transition is a pure function that
/// takes the current item count and limit, so the window and the index are always
/// recomputed together.
///
/// Invariants (for the item count and limit it was last computed with):
/// - `selected_index < window_size`, or `0` for an empty list.
/// - `rotate_index < item_count`, or `0` for an empty list. It is always `0` when no
///   limit applies.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NavigatorState {
    pub rotate_index: usize,
    pub selected_index: usize,
}

/// What to do when a move would leave the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    /// Stay put. Used by the arrow keys, `j` and `k`.
    Clamp,
    /// Wrap around. Used by `Tab` and `Shift+Tab`. Without a limit the highlight jumps
    /// to the other end of the list; with a limit the list rotates under a fixed
    /// highlight.
    Wrap,
}

impl NavigatorState {
    /// State for a freshly created navigator. `initial_index` is a logical index into the
    /// full list. When it lies past the last visible slot, the highlight goes on the last
    /// slot and the list is rotated so that the window ends at `initial_index`.
    #[must_use]
    pub fn new_initial(item_count: usize, limit: Option<usize>, initial_index: usize) -> Self {
        if item_count == 0 {
            return Self::default();
        }

        let initial_index = initial_index.min(item_count - 1);
        let last_slot = window_size(item_count, limit) - 1;

        if limit_applies(item_count, limit) && initial_index > last_slot {
            Self {
                rotate_index: (item_count + last_slot - initial_index) % item_count,
                selected_index: last_slot,
            }
        } else {
            Self {
                rotate_index: 0,
                selected_index: initial_index,
            }
        }
    }

    /// Pull the state back inside the window for `item_count` and `limit`. Used when the
    /// list shrinks or the limit changes while the identity sequence stays the same.
    #[must_use]
    pub fn clamp(self, item_count: usize, limit: Option<usize>) -> Self {
        if item_count == 0 {
            return Self::default();
        }

        let last_slot = window_size(item_count, limit) - 1;
        let rotate_index = if limit_applies(item_count, limit) {
            self.rotate_index % item_count
        } else {
            0
        };

        Self {
            rotate_index,
            selected_index: self.selected_index.min(last_slot),
        }
    }

    /// Compare the previous identity sequence against `new_items`. If any value changed
    /// (or moved, or the length changed) the state resets to `(0, 0)`. Otherwise it is
    /// kept, clamped to the new window.
    #[must_use]
    pub fn reconcile<V: PartialEq>(
        self,
        prev_values: &[V],
        new_items: &[Item<V>],
        limit: Option<usize>,
    ) -> Self {
        if is_same_identity_sequence(prev_values, new_items) {
            self.clamp(new_items.len(), limit)
        } else {
            Self::default()
        }
    }

    /// Move the highlight one slot towards the start of the window. Returns `None` when
    /// nothing moves: the list is empty, or a clamping key hit the first slot. A wrap is
    /// always a transition, even when it lands on the same state (a single item list).
    #[must_use]
    pub fn previous(
        self,
        item_count: usize,
        limit: Option<usize>,
        policy: BoundaryPolicy,
    ) -> Option<Self> {
        if item_count == 0 {
            return None;
        }

        if self.selected_index > 0 {
            return Some(Self {
                selected_index: self.selected_index - 1,
                ..self
            });
        }

        match policy {
            BoundaryPolicy::Clamp => None,
            BoundaryPolicy::Wrap if limit_applies(item_count, limit) => Some(Self {
                rotate_index: (self.rotate_index + 1) % item_count,
                ..self
            }),
            BoundaryPolicy::Wrap => Some(Self {
                selected_index: window_size(item_count, limit) - 1,
                ..self
            }),
        }
    }

    /// Move the highlight one slot towards the end of the window. Returns `None` under
    /// the same conditions as [`Self::previous`].
    #[must_use]
    pub fn next(
        self,
        item_count: usize,
        limit: Option<usize>,
        policy: BoundaryPolicy,
    ) -> Option<Self> {
        if item_count == 0 {
            return None;
        }

        if self.selected_index + 1 < window_size(item_count, limit) {
            return Some(Self {
                selected_index: self.selected_index + 1,
                ..self
            });
        }

        match policy {
            BoundaryPolicy::Clamp => None,
            BoundaryPolicy::Wrap if limit_applies(item_count, limit) => Some(Self {
                rotate_index: (self.rotate_index + item_count - 1) % item_count,
                ..self
            }),
            BoundaryPolicy::Wrap => Some(Self {
                selected_index: 0,
                ..self
            }),
        }
    }
}
