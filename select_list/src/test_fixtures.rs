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

use std::sync::{Arc, Mutex};

use crate::Item;

/// Items whose values are the lower case form of their labels, so that tests can change
/// labels without changing the identity sequence.
pub fn make_items(labels: &[&str]) -> Vec<Item<String>> {
    labels
        .iter()
        .map(|label| Item::new(*label, label.to_lowercase()))
        .collect()
}

/// Records every callback as `"<name>:<label>"`, in the order they fired.
#[derive(Debug, Clone, Default)]
pub struct CallbackRecorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallbackRecorder {
    pub fn handler<V>(&self, name: &'static str) -> impl FnMut(&Item<V>) + Send + use<V> {
        let calls = self.calls.clone();
        move |item: &Item<V>| {
            calls.lock().unwrap().push(format!("{name}:{}", item.label));
        }
    }

    /// Drain the recorded calls.
    pub fn take(&self) -> Vec<String> { std::mem::take(&mut *self.calls.lock().unwrap()) }
}
