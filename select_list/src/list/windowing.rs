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

//! Maps the logical index space (all items) onto the physical window (the visible
//! slice).
//!
//! When a limit applies, the full list is rotated first and then the first `limit`
//! elements are taken. Slot `j` of the rotated list holds logical item
//! `(j - rotate_index) mod n`:
//!
//! ```text
//! items: A B C D E, limit: 3
//!
//! rotate_index │ slot 0  slot 1  slot 2
//! ─────────────┼───────────────────────
//!            0 │   A       B       C
//!            4 │   B       C       D     (one step "down" from 0)
//!            3 │   C       D       E
//!            1 │   E       A       B     (one step "up" from 0)
//! ```

use super::Item;
use crate::InlineVec;

/// A limit of `0` is the same as no limit.
#[must_use]
pub fn limit_applies(item_count: usize, limit: Option<usize>) -> bool {
    matches!(limit, Some(limit) if limit > 0 && limit < item_count)
}

/// Number of slots in the visible window. `0` for an empty list.
#[must_use]
pub fn window_size(item_count: usize, limit: Option<usize>) -> usize {
    match limit {
        Some(limit) if limit_applies(item_count, Some(limit)) => limit,
        _ => item_count,
    }
}

/// Index into the full list of the item shown in `slot`. `rotate_index` is taken modulo
/// `item_count`, so any value is accepted. Returns `None` for an empty list.
#[must_use]
pub fn logical_index_for_slot(
    item_count: usize,
    rotate_index: usize,
    slot: usize,
) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let rotate_index = rotate_index % item_count;
    Some((slot % item_count + item_count - rotate_index) % item_count)
}

/// The items eligible for display and indexing, in slot order. Its length is always
/// [`window_size`]. Rotation is ignored when no limit applies.
pub fn visible_slice<V>(
    items: &[Item<V>],
    rotate_index: usize,
    limit: Option<usize>,
) -> InlineVec<&Item<V>> {
    if !limit_applies(items.len(), limit) {
        return items.iter().collect();
    }

    (0..window_size(items.len(), limit))
        .filter_map(|slot| logical_index_for_slot(items.len(), rotate_index, slot))
        .filter_map(|index| items.get(index))
        .collect()
}

/// The item in `slot` of the visible slice, without materializing the slice.
pub fn visible_item_at<V>(
    items: &[Item<V>],
    rotate_index: usize,
    limit: Option<usize>,
    slot: usize,
) -> Option<&Item<V>> {
    if slot >= window_size(items.len(), limit) {
        return None;
    }
    let rotate_index = if limit_applies(items.len(), limit) {
        rotate_index
    } else {
        0
    };
    logical_index_for_slot(items.len(), rotate_index, slot).and_then(|index| items.get(index))
}
