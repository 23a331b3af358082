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

//! Pluggable presentation. A [`crate::Navigator`] holds one of each renderer as a trait
//! object, picked at construction time. The defaults produce plain text, so the frame can
//! be printed as is, or handed to a styling layer.

use super::Item;

/// Marks which row is highlighted.
pub trait IndicatorRenderer: Send {
    fn render_indicator(&self, is_selected: bool) -> String;
}

/// Turns an item into the text for its row (or column, in row mode).
pub trait ItemRenderer<V>: Send {
    fn render_item(&self, item: &Item<V>, is_selected: bool) -> String;
}

/// Drawn between two consecutive visible items in [`crate::Direction::Row`] mode only.
pub trait DividerRenderer: Send {
    fn render_divider(&self) -> String;
}

pub const DEFAULT_INDICATOR_SELECTED: &str = "❯ ";
pub const DEFAULT_INDICATOR_NOT_SELECTED: &str = "  ";
pub const DEFAULT_DIVIDER: &str = " │ ";

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIndicatorRenderer;

impl IndicatorRenderer for DefaultIndicatorRenderer {
    fn render_indicator(&self, is_selected: bool) -> String {
        if is_selected {
            DEFAULT_INDICATOR_SELECTED.to_string()
        } else {
            DEFAULT_INDICATOR_NOT_SELECTED.to_string()
        }
    }
}

/// Renders the label.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultItemRenderer;

impl<V> ItemRenderer<V> for DefaultItemRenderer {
    fn render_item(&self, item: &Item<V>, _is_selected: bool) -> String {
        item.label.clone()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDividerRenderer;

impl DividerRenderer for DefaultDividerRenderer {
    fn render_divider(&self) -> String { DEFAULT_DIVIDER.to_string() }
}

mod closures {
    use super::{DividerRenderer, IndicatorRenderer, Item, ItemRenderer};

    impl<F> IndicatorRenderer for F
    where
        F: Fn(bool) -> String + Send,
    {
        fn render_indicator(&self, is_selected: bool) -> String { self(is_selected) }
    }

    impl<V, F> ItemRenderer<V> for F
    where
        F: Fn(&Item<V>, bool) -> String + Send,
    {
        fn render_item(&self, item: &Item<V>, is_selected: bool) -> String {
            self(item, is_selected)
        }
    }

    /// A fixed string as the divider.
    impl DividerRenderer for &'static str {
        fn render_divider(&self) -> String { (*self).to_string() }
    }

    impl DividerRenderer for String {
        fn render_divider(&self) -> String { self.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_defaults() {
        let item = Item::new("Apple", 1);
        assert_eq2!(DefaultIndicatorRenderer.render_indicator(true), "❯ ");
        assert_eq2!(DefaultIndicatorRenderer.render_indicator(false), "  ");
        assert_eq2!(DefaultItemRenderer.render_item(&item, true), "Apple");
        assert_eq2!(DefaultDividerRenderer.render_divider(), " │ ");
    }

    #[test]
    fn test_closures_and_strings() {
        let indicator = |is_selected: bool| (if is_selected { ">" } else { " " }).to_string();
        assert_eq2!(indicator.render_indicator(true), ">");

        let item_renderer =
            |item: &Item<i32>, _: bool| format!("{} ({})", item.label, item.value);
        assert_eq2!(item_renderer.render_item(&Item::new("One", 1), false), "One (1)");

        assert_eq2!(", ".render_divider(), ", ");
    }
}
