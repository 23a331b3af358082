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

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::{DefaultDividerRenderer, DefaultIndicatorRenderer, DefaultItemRenderer,
            Direction, DividerRenderer, EventPropagation,
            IndicatorRenderer, InputClass, Item, ItemRenderer, NavigatorState,
            RenderedFrame, VisibleEntry, classify, identity_sequence,
            is_same_identity_sequence, visible_item_at, visible_slice};
use crate::{DEVELOPMENT_MODE, InlineVec, InputEvent};

/// Called with the item that was picked (`on_select`) or newly highlighted
/// (`on_highlight`). Runs synchronously, after the state has been committed.
pub type OnItemHandler<V> = Box<dyn FnMut(&Item<V>) + Send>;

/// The serializable part of a [`Navigator`]'s configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct NavigatorOptions {
    /// When `false`, every input event propagates and nothing changes.
    pub is_focused: bool,
    /// Logical index (into the full list) of the item highlighted at first render.
    pub initial_index: usize,
    pub direction: Direction,
    /// Maximum number of visible items. `None` or `Some(0)` shows all of them.
    pub limit: Option<usize>,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            is_focused: true,
            initial_index: 0,
            direction: Direction::default(),
            limit: None,
        }
    }
}

impl From<Direction> for NavigatorOptions {
    fn from(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }
}

/// Keyboard driven select list. The list of items is owned by the caller and passed in
/// to every method that needs it; the navigator only keeps a copy of the item values to
/// notice when the list changes.
///
/// ```text
/// ┌──────────────┐  KeyPress  ┌───────────┐ (rotate_index,  ┌───────────────┐
/// │ InputEvent   ├───────────►│ classify  ├─selected_index)─► visible slice │
/// └──────────────┘            └───────────┘                 └───────┬───────┘
///                                  │ on_highlight / on_select       │ render
///                                  ▼                                ▼
///                               callbacks                     RenderedFrame
/// ```
pub struct Navigator<V> {
    pub options: NavigatorOptions,
    state: NavigatorState,
    /// `None` until the first time the navigator sees the items.
    identity_sequence: Option<Vec<V>>,
    indicator: Box<dyn IndicatorRenderer>,
    item_renderer: Box<dyn ItemRenderer<V>>,
    divider: Box<dyn DividerRenderer>,
    on_select: Option<OnItemHandler<V>>,
    on_highlight: Option<OnItemHandler<V>>,
}

impl<V: Debug> Debug for Navigator<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("identity_sequence", &self.identity_sequence)
            .field("indicator", &"<renderer>")
            .field("item_renderer", &"<renderer>")
            .field("divider", &"<renderer>")
            .field("on_select", &self.on_select.as_ref().map(|_| "<function>"))
            .field("on_highlight", &self.on_highlight.as_ref().map(|_| "<function>"))
            .finish()
    }
}

impl<V> Default for Navigator<V>
where
    V: Clone + PartialEq + Debug + 'static,
{
    fn default() -> Self { Self::new(NavigatorOptions::default()) }
}

// ┌─────────────────────────────────────────────────────────────────────────┐
// │ Construction                                                            │
// └─────────────────────────────────────────────────────────────────────────┘

impl<V> Navigator<V>
where
    V: Clone + PartialEq + Debug + 'static,
{
    #[must_use]
    pub fn new(options: impl Into<NavigatorOptions>) -> Self {
        Self {
            options: options.into(),
            state: NavigatorState::default(),
            identity_sequence: None,
            indicator: Box::new(DefaultIndicatorRenderer),
            item_renderer: Box::new(DefaultItemRenderer),
            divider: Box::new(DefaultDividerRenderer),
            on_select: None,
            on_highlight: None,
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.options.direction = direction;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.set_limit(limit);
        self
    }

    /// Only takes effect before the navigator has seen the items for the first time.
    #[must_use]
    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.options.initial_index = initial_index;
        self
    }

    #[must_use]
    pub fn with_is_focused(mut self, is_focused: bool) -> Self {
        self.options.is_focused = is_focused;
        self
    }

    #[must_use]
    pub fn with_indicator(mut self, indicator: impl IndicatorRenderer + 'static) -> Self {
        self.indicator = Box::new(indicator);
        self
    }

    #[must_use]
    pub fn with_item_renderer(mut self, item_renderer: impl ItemRenderer<V> + 'static) -> Self {
        self.item_renderer = Box::new(item_renderer);
        self
    }

    #[must_use]
    pub fn with_divider(mut self, divider: impl DividerRenderer + 'static) -> Self {
        self.divider = Box::new(divider);
        self
    }

    #[must_use]
    pub fn on_select(mut self, handler: impl FnMut(&Item<V>) + Send + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_highlight(mut self, handler: impl FnMut(&Item<V>) + Send + 'static) -> Self {
        self.on_highlight = Some(Box::new(handler));
        self
    }
}

// ┌─────────────────────────────────────────────────────────────────────────┐
// │ State                                                                   │
// └─────────────────────────────────────────────────────────────────────────┘

impl<V> Navigator<V>
where
    V: Clone + PartialEq + Debug + 'static,
{
    #[must_use]
    pub fn state(&self) -> NavigatorState { self.state }

    #[must_use]
    pub fn is_focused(&self) -> bool { self.options.is_focused }

    pub fn set_is_focused(&mut self, is_focused: bool) { self.options.is_focused = is_focused; }

    /// Change the limit. The state is clamped to the new window right away, against the
    /// last list of items that was seen.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.options.limit = limit;
        if let Some(values) = &self.identity_sequence {
            self.state = self.state.clamp(values.len(), limit);
        }
    }

    /// Bring the state in line with `items`. Every other method that takes `items` calls
    /// this first, so hosts only need to call it directly when the list changes without
    /// an event or a render following.
    ///
    /// - The first call computes the initial state from `initial_index`.
    /// - If the ordered sequence of item values changed, the state resets to `(0, 0)`.
    /// - Otherwise the state is clamped to the (possibly smaller) window.
    pub fn sync(&mut self, items: &[Item<V>]) {
        let limit = self.options.limit;

        match &self.identity_sequence {
            None => {
                self.state =
                    NavigatorState::new_initial(items.len(), limit, self.options.initial_index);
                self.identity_sequence = Some(identity_sequence(items));
                DEVELOPMENT_MODE.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "🎬 navigator -> initial state",
                        item_count = %items.len(),
                        state = ?self.state,
                    );
                });
            }
            Some(prev_values) if is_same_identity_sequence(prev_values, items) => {
                self.state = self.state.clamp(items.len(), limit);
            }
            Some(prev_values) => {
                let new_state = self.state.reconcile(prev_values, items, limit);
                DEVELOPMENT_MODE.then(|| {
                    tracing::debug!(
                        message = "🔄 navigator -> items changed, reset state",
                        prev_item_count = %prev_values.len(),
                        item_count = %items.len(),
                        prev_state = ?self.state,
                        state = ?new_state,
                    );
                });
                self.state = new_state;
                self.identity_sequence = Some(identity_sequence(items));
            }
        }
    }

    /// The item under the highlight, if the list is not empty.
    pub fn highlighted_item<'a>(&mut self, items: &'a [Item<V>]) -> Option<&'a Item<V>> {
        self.sync(items);
        visible_item_at(
            items,
            self.state.rotate_index,
            self.options.limit,
            self.state.selected_index,
        )
    }
}

// ┌─────────────────────────────────────────────────────────────────────────┐
// │ Event handling                                                          │
// └─────────────────────────────────────────────────────────────────────────┘

impl<V> Navigator<V>
where
    V: Clone + PartialEq + Debug + 'static,
{
    /// Only keyboard events are handled. See [`classify`] for the key bindings.
    ///
    /// Returns [`EventPropagation::ConsumedRender`] when the highlight moved or wrapped,
    /// [`EventPropagation::Consumed`] for selections and for plain navigation keys that
    /// hit the edge of the window, and [`EventPropagation::Propagate`] for everything the
    /// navigator ignores (including all events while not focused, or when the list is
    /// empty).
    pub fn handle_input_event(
        &mut self,
        items: &[Item<V>],
        input_event: InputEvent,
    ) -> EventPropagation {
        self.sync(items);

        if !self.options.is_focused || items.is_empty() {
            return EventPropagation::Propagate;
        }

        let InputEvent::Keyboard(key_press) = input_event else {
            return EventPropagation::Propagate;
        };

        let Some(input_class) = classify(&key_press, self.options.direction) else {
            return EventPropagation::Propagate;
        };

        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(
                message = "⌨️ navigator -> handle_input_event",
                key_press = ?key_press,
                input_class = ?input_class,
                state = ?self.state,
            );
        });

        match input_class {
            InputClass::Previous(policy) => self.move_highlight(items, |state, count, limit| {
                state.previous(count, limit, policy)
            }),
            InputClass::Next(policy) => self.move_highlight(items, |state, count, limit| {
                state.next(count, limit, policy)
            }),
            InputClass::DirectSelect(slot) => {
                let Some(item) = visible_item_at(
                    items,
                    self.state.rotate_index,
                    self.options.limit,
                    slot,
                ) else {
                    return EventPropagation::Propagate;
                };
                self.fire_on_select(item);
                EventPropagation::Consumed
            }
            InputClass::Confirm => {
                if let Some(item) = visible_item_at(
                    items,
                    self.state.rotate_index,
                    self.options.limit,
                    self.state.selected_index,
                ) {
                    self.fire_on_select(item);
                }
                EventPropagation::Consumed
            }
        }
    }

    fn move_highlight(
        &mut self,
        items: &[Item<V>],
        transition: impl FnOnce(NavigatorState, usize, Option<usize>) -> Option<NavigatorState>,
    ) -> EventPropagation {
        let Some(new_state) = transition(self.state, items.len(), self.options.limit) else {
            return EventPropagation::Consumed;
        };

        // Commit first, then notify.
        self.state = new_state;
        let highlighted = visible_item_at(
            items,
            new_state.rotate_index,
            self.options.limit,
            new_state.selected_index,
        );

        if let (Some(item), Some(handler)) = (highlighted, self.on_highlight.as_mut()) {
            handler(item);
        }

        EventPropagation::ConsumedRender
    }

    fn fire_on_select(&mut self, item: &Item<V>) {
        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(
                message = "✅ navigator -> on_select",
                label = %item.label,
                value = ?item.value,
            );
        });
        if let Some(handler) = self.on_select.as_mut() {
            handler(item);
        }
    }
}

// ┌─────────────────────────────────────────────────────────────────────────┐
// │ Presentation                                                            │
// └─────────────────────────────────────────────────────────────────────────┘

impl<V> Navigator<V>
where
    V: Clone + PartialEq + Debug + 'static,
{
    /// The visible slice in slot order, with the highlighted entry flagged.
    pub fn visible_entries<'a>(&mut self, items: &'a [Item<V>]) -> InlineVec<VisibleEntry<'a, V>> {
        self.sync(items);
        visible_slice(items, self.state.rotate_index, self.options.limit)
            .into_iter()
            .enumerate()
            .map(|(slot, item)| VisibleEntry {
                slot,
                item,
                is_selected: slot == self.state.selected_index,
                identity: item.identity(),
            })
            .collect()
    }

    pub fn render(&mut self, items: &[Item<V>]) -> RenderedFrame {
        let entries = self.visible_entries(items);
        RenderedFrame::layout(
            self.options.direction,
            &entries,
            self.indicator.as_ref(),
            self.item_renderer.as_ref(),
            self.divider.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ModifierKeysMask, SpecialKey, assert_eq2, items, keypress,
                test_fixtures::{CallbackRecorder, make_items}};

    fn key(key_press: crate::KeyPress) -> InputEvent { InputEvent::Keyboard(key_press) }

    fn down() -> InputEvent { key(keypress!(@special SpecialKey::Down)) }
    fn up() -> InputEvent { key(keypress!(@special SpecialKey::Up)) }
    fn tab() -> InputEvent { key(keypress!(@special SpecialKey::Tab)) }
    fn shift_tab() -> InputEvent {
        key(keypress!(@special ModifierKeysMask::new().with_shift(), SpecialKey::Tab))
    }
    fn enter() -> InputEvent { key(keypress!(@special SpecialKey::Enter)) }
    fn digit(ch: char) -> InputEvent { key(keypress!(@char ch)) }

    fn labels(navigator: &mut Navigator<String>, items: &[Item<String>]) -> Vec<String> {
        navigator
            .visible_entries(items)
            .iter()
            .map(|entry| entry.item.label.clone())
            .collect()
    }

    fn recording_navigator(
        options: NavigatorOptions,
        recorder: &CallbackRecorder,
    ) -> Navigator<String> {
        Navigator::new(options)
            .on_highlight(recorder.handler("highlight"))
            .on_select(recorder.handler("select"))
    }

    #[test]
    fn test_limit_three_next_then_tab_rotates() {
        let items = make_items(&["A", "B", "C", "D", "E"]);
        let recorder = CallbackRecorder::default();
        let mut navigator = recording_navigator(
            NavigatorOptions {
                limit: Some(3),
                ..Default::default()
            },
            &recorder,
        );

        assert_eq2!(navigator.handle_input_event(&items, down()), EventPropagation::ConsumedRender);
        assert_eq2!(navigator.handle_input_event(&items, down()), EventPropagation::ConsumedRender);
        assert_eq2!(navigator.state().selected_index, 2);
        assert_eq2!(recorder.take(), vec!["highlight:B", "highlight:C"]);

        // Plain Down at the edge stops.
        assert_eq2!(navigator.handle_input_event(&items, down()), EventPropagation::Consumed);
        assert!(recorder.take().is_empty());

        // Tab at the edge rotates the list under the highlight.
        assert_eq2!(navigator.handle_input_event(&items, tab()), EventPropagation::ConsumedRender);
        assert_eq2!(labels(&mut navigator, &items), vec!["B", "C", "D"]);
        assert_eq2!(navigator.state().selected_index, 2);
        assert_eq2!(recorder.take(), vec!["highlight:D"]);
    }

    #[test]
    fn test_no_limit_tab_and_shift_tab_wrap() {
        let items = make_items(&["A", "B", "C"]);
        let recorder = CallbackRecorder::default();
        let mut navigator = recording_navigator(NavigatorOptions::default(), &recorder);

        // Shift+Tab from the first slot goes to the last one.
        navigator.handle_input_event(&items, shift_tab());
        assert_eq2!(navigator.state(), NavigatorState {
            rotate_index: 0,
            selected_index: 2
        });
        // Down at the last slot is a no-op.
        assert_eq2!(navigator.handle_input_event(&items, down()), EventPropagation::Consumed);
        // Tab from the last slot goes to the first.
        navigator.handle_input_event(&items, tab());
        assert_eq2!(navigator.state().selected_index, 0);
        // Up at the first slot is a no-op.
        assert_eq2!(navigator.handle_input_event(&items, up()), EventPropagation::Consumed);

        assert_eq2!(recorder.take(), vec!["highlight:C", "highlight:A"]);
    }

    #[test]
    fn test_single_item_wrap_fires_on_highlight() {
        let items = make_items(&["A"]);
        let recorder = CallbackRecorder::default();
        let mut navigator = recording_navigator(NavigatorOptions::default(), &recorder);

        assert_eq2!(navigator.handle_input_event(&items, tab()), EventPropagation::ConsumedRender);
        assert_eq2!(
            navigator.handle_input_event(&items, shift_tab()),
            EventPropagation::ConsumedRender
        );
        assert_eq2!(recorder.take(), vec!["highlight:A", "highlight:A"]);

        // Plain keys at the edge stay quiet.
        assert_eq2!(navigator.handle_input_event(&items, down()), EventPropagation::Consumed);
        assert_eq2!(navigator.handle_input_event(&items, up()), EventPropagation::Consumed);
        assert!(recorder.take().is_empty());
        assert_eq2!(navigator.state(), NavigatorState::default());
    }

    #[test]
    fn test_backtab_with_limit_brings_previous_item_in() {
        let items = make_items(&["A", "B", "C", "D", "E"]);
        let mut navigator = Navigator::new(NavigatorOptions {
            limit: Some(3),
            ..Default::default()
        });
        navigator.handle_input_event(&items, key(keypress!(@special SpecialKey::BackTab)));
        assert_eq2!(labels(&mut navigator, &items), vec!["E", "A", "B"]);
        assert_eq2!(navigator.highlighted_item(&items).map(|it| it.label.as_str()), Some("E"));
    }

    #[test]
    fn test_full_cycle_of_tabs_restores_rotation() {
        let items = make_items(&["A", "B", "C", "D", "E"]);
        let mut navigator = Navigator::new(NavigatorOptions {
            limit: Some(2),
            ..Default::default()
        });
        navigator.handle_input_event(&items, down());
        let start = navigator.state();

        for _ in 0..items.len() {
            navigator.handle_input_event(&items, tab());
            assert_eq2!(navigator.visible_entries(&items).len(), 2);
        }
        assert_eq2!(navigator.state(), start);
    }

    #[test]
    fn test_row_direction_uses_left_right_and_dividers() {
        let items = make_items(&["A", "B", "C"]);
        let recorder = CallbackRecorder::default();
        let mut navigator =
            recording_navigator(NavigatorOptions::from(Direction::Row), &recorder);

        assert_eq2!(navigator.handle_input_event(&items, down()), EventPropagation::Propagate);
        navigator.handle_input_event(&items, key(keypress!(@special SpecialKey::Right)));
        assert_eq2!(recorder.take(), vec!["highlight:B"]);

        let frame = navigator.render(&items);
        assert_eq2!(frame.cells.len(), 5);
        assert_eq2!(frame.to_string(), "  A │ ❯ B │   C");
    }

    #[test]
    fn test_digits_select_visible_slots() {
        let items = make_items(&["A", "B", "C", "D", "E"]);
        let recorder = CallbackRecorder::default();
        let mut navigator = recording_navigator(
            NavigatorOptions {
                limit: Some(3),
                ..Default::default()
            },
            &recorder,
        );
        navigator.handle_input_event(&items, shift_tab());
        recorder.take();

        // Visible slice is [E, A, B].
        assert_eq2!(navigator.handle_input_event(&items, digit('1')), EventPropagation::Consumed);
        assert_eq2!(navigator.handle_input_event(&items, digit('3')), EventPropagation::Consumed);
        assert_eq2!(navigator.handle_input_event(&items, digit('4')), EventPropagation::Propagate);
        assert_eq2!(recorder.take(), vec!["select:E", "select:B"]);

        // Selection does not move the highlight.
        assert_eq2!(navigator.state().selected_index, 0);
    }

    #[test]
    fn test_enter_confirms_highlight() {
        let items = make_items(&["A", "B", "C"]);
        let recorder = CallbackRecorder::default();
        let mut navigator = recording_navigator(
            NavigatorOptions {
                initial_index: 1,
                ..Default::default()
            },
            &recorder,
        );
        assert_eq2!(navigator.handle_input_event(&items, enter()), EventPropagation::Consumed);
        assert_eq2!(recorder.take(), vec!["select:B"]);
    }

    #[test]
    fn test_empty_list_does_nothing() {
        let items: Vec<Item<String>> = vec![];
        let recorder = CallbackRecorder::default();
        let mut navigator = recording_navigator(NavigatorOptions::default(), &recorder);

        for event in [down(), up(), tab(), shift_tab(), enter(), digit('1')] {
            assert_eq2!(navigator.handle_input_event(&items, event), EventPropagation::Propagate);
        }
        assert!(recorder.take().is_empty());
        assert_eq2!(navigator.highlighted_item(&items), None);
        assert!(navigator.render(&items).cells.is_empty());
    }

    #[test]
    fn test_unfocused_ignores_input() {
        let items = make_items(&["A", "B"]);
        let recorder = CallbackRecorder::default();
        let mut navigator = recording_navigator(NavigatorOptions::default(), &recorder)
            .with_is_focused(false);

        assert_eq2!(navigator.handle_input_event(&items, down()), EventPropagation::Propagate);
        assert_eq2!(navigator.handle_input_event(&items, enter()), EventPropagation::Propagate);
        assert!(recorder.take().is_empty());

        navigator.set_is_focused(true);
        assert_eq2!(navigator.handle_input_event(&items, down()), EventPropagation::ConsumedRender);
    }

    #[test]
    fn test_value_change_resets_label_change_does_not() {
        let items = make_items(&["A", "B", "C", "D"]);
        let mut navigator = Navigator::new(NavigatorOptions {
            limit: Some(2),
            ..Default::default()
        });
        navigator.handle_input_event(&items, down());
        navigator.handle_input_event(&items, tab());
        let moved = navigator.state();
        assert_eq2!(moved, NavigatorState {
            rotate_index: 3,
            selected_index: 1
        });

        // Same values, new labels and keys.
        let relabeled: Vec<Item<String>> = items
            .iter()
            .map(|item| Item::new(item.label.to_lowercase(), item.value.clone()).with_key("k"))
            .collect();
        navigator.sync(&relabeled);
        assert_eq2!(navigator.state(), moved);

        // A value changed.
        let changed = make_items(&["A", "B", "C", "X"]);
        navigator.sync(&changed);
        assert_eq2!(navigator.state(), NavigatorState::default());
    }

    #[test]
    fn test_list_shrink_never_goes_out_of_bounds() {
        let items = items!["A", "B", "C", "D", "E"];
        let mut navigator = Navigator::new(NavigatorOptions {
            initial_index: 4,
            ..Default::default()
        });
        assert_eq2!(navigator.highlighted_item(&items).map(|it| it.label.as_str()), Some("E"));

        // A different list resets to the first item.
        let shorter = items!["A", "B"];
        assert_eq2!(navigator.highlighted_item(&shorter).map(|it| it.label.as_str()), Some("A"));
    }

    #[test]
    fn test_set_limit_clamps_state() {
        let items = make_items(&["A", "B", "C", "D", "E"]);
        let mut navigator: Navigator<String> = Navigator::default();
        navigator.sync(&items);
        navigator.handle_input_event(&items, shift_tab());
        assert_eq2!(navigator.state().selected_index, 4);

        navigator.set_limit(Some(2));
        assert_eq2!(navigator.state(), NavigatorState {
            rotate_index: 0,
            selected_index: 1
        });
        assert_eq2!(labels(&mut navigator, &items), vec!["A", "B"]);

        navigator.set_limit(Some(0));
        assert_eq2!(labels(&mut navigator, &items).len(), 5);
    }

    #[test]
    fn test_initial_index_past_window() {
        let items = make_items(&["A", "B", "C", "D", "E"]);
        let mut navigator = Navigator::new(NavigatorOptions {
            limit: Some(3),
            initial_index: 3,
            ..Default::default()
        });
        assert_eq2!(labels(&mut navigator, &items), vec!["B", "C", "D"]);
        assert_eq2!(navigator.highlighted_item(&items).map(|it| it.label.as_str()), Some("D"));
    }

    #[test]
    fn test_custom_renderers() {
        let items = vec![Item::new("One", 1), Item::new("Two", 2)];
        let mut navigator = Navigator::new(Direction::Row)
            .with_indicator(|is_selected: bool| (if is_selected { "*" } else { "" }).to_string())
            .with_item_renderer(|item: &Item<i32>, _: bool| format!("{}={}", item.label, item.value))
            .with_divider(", ");
        assert_eq2!(navigator.render(&items).to_string(), "*One=1, Two=2");
    }

    #[test]
    fn test_visible_entries_carry_identity() {
        let items = vec![Item::new("One", 1).with_key("first"), Item::new("Two", 2)];
        let mut navigator = Navigator::new(NavigatorOptions::default());
        let entries = navigator.visible_entries(&items);
        assert_eq2!(entries[0].identity, crate::ItemIdentity::Key("first"));
        assert_eq2!(entries[1].identity, crate::ItemIdentity::Value(&2));
        assert!(entries[0].is_selected);
        assert!(!entries[1].is_selected);
    }

    #[test]
    fn test_options_from_json() {
        let options: NavigatorOptions =
            serde_json::from_str(r#"{ "limit": 3, "direction": "row" }"#).unwrap();
        assert_eq2!(options, NavigatorOptions {
            is_focused: true,
            initial_index: 0,
            direction: Direction::Row,
            limit: Some(3),
        });
    }
}
