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

/// One option in a select list. The list of items is owned by the caller and passed in
/// on every render and every event; the navigator never mutates it.
///
/// - `label` is what gets displayed.
/// - `value` is handed back to the callbacks, and the ordered sequence of values is what
///   the navigator compares to decide whether the list is "the same list" as before.
/// - `key` is an optional stable render identity. When it is absent, `value` is used.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item<V> {
    pub label: String,
    pub value: V,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// What a renderer should use to tell visible rows apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemIdentity<'a, V> {
    Key(&'a str),
    Value(&'a V),
}

impl<V> Item<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
            key: None,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn identity(&self) -> ItemIdentity<'_, V> {
        match &self.key {
            Some(key) => ItemIdentity::Key(key),
            None => ItemIdentity::Value(&self.value),
        }
    }
}

impl From<&str> for Item<String> {
    fn from(label: &str) -> Self { Item::new(label, label.to_string()) }
}

impl From<String> for Item<String> {
    fn from(label: String) -> Self { Item::new(label.clone(), label) }
}

/// Clone the ordered sequence of values out of `items`. This is the only copy of the
/// caller's list that the navigator keeps around.
pub fn identity_sequence<V: Clone>(items: &[Item<V>]) -> Vec<V> {
    items.iter().map(|item| item.value.clone()).collect()
}

/// Labels and keys do not take part in this comparison, only values (in order).
pub fn is_same_identity_sequence<V: PartialEq>(
    prev_values: &[V],
    items: &[Item<V>],
) -> bool {
    prev_values.len() == items.len()
        && prev_values
            .iter()
            .zip(items)
            .all(|(prev, item)| *prev == item.value)
}
