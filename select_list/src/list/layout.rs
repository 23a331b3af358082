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

use std::fmt::{Display, Formatter, Result};

use super::{Direction, DividerRenderer, IndicatorRenderer, Item, ItemIdentity, ItemRenderer};
use crate::InlineVec;

/// One entry of the visible slice, as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleEntry<'a, V> {
    pub slot: usize,
    pub item: &'a Item<V>,
    pub is_selected: bool,
    pub identity: ItemIdentity<'a, V>,
}

/// A single axis layout container, filled in with the output of the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedFrame {
    pub direction: Direction,
    pub cells: InlineVec<RenderedCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedCell {
    Item {
        slot: usize,
        is_selected: bool,
        /// Indicator followed by the item text.
        text: String,
    },
    Divider(String),
}

impl RenderedCell {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            RenderedCell::Item { text, .. } | RenderedCell::Divider(text) => text,
        }
    }
}

impl RenderedFrame {
    /// Lay out `entries` along `direction`. Dividers go between consecutive items in
    /// [`Direction::Row`] mode, never after the last one.
    pub fn layout<V>(
        direction: Direction,
        entries: &[VisibleEntry<'_, V>],
        indicator: &dyn IndicatorRenderer,
        item_renderer: &dyn ItemRenderer<V>,
        divider: &dyn DividerRenderer,
    ) -> Self {
        let mut cells = InlineVec::new();

        for (index, entry) in entries.iter().enumerate() {
            if index > 0 && direction.has_dividers() {
                cells.push(RenderedCell::Divider(divider.render_divider()));
            }
            let mut text = indicator.render_indicator(entry.is_selected);
            text.push_str(&item_renderer.render_item(entry.item, entry.is_selected));
            cells.push(RenderedCell::Item {
                slot: entry.slot,
                is_selected: entry.is_selected,
                text,
            });
        }

        Self { direction, cells }
    }

    /// Column mode is one line per item. Row mode is a single line.
    pub fn lines(&self) -> Vec<String> {
        match self.direction {
            Direction::Column => self
                .cells
                .iter()
                .map(|cell| cell.text().to_string())
                .collect(),
            Direction::Row if self.cells.is_empty() => vec![],
            Direction::Row => vec![self.cells.iter().map(RenderedCell::text).collect()],
        }
    }
}

impl Display for RenderedFrame {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.lines().join("\n")) }
}
