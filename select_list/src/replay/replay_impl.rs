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

use std::{fmt::{Debug, Display, Formatter},
          path::Path,
          sync::mpsc};

use crate::{EventPropagation, InputEvent, Item, KeyPress, Navigator, NavigatorOptions,
            RenderedFrame, SelectListError};

/// A callback that fired while a key was being handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent<V> {
    Highlight(Item<V>),
    Select(Item<V>),
}

/// What happened when a single key was fed to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep<V> {
    pub key_press: KeyPress,
    pub propagation: EventPropagation,
    pub events: Vec<ReplayEvent<V>>,
    pub frame: RenderedFrame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport<V> {
    pub initial_frame: RenderedFrame,
    pub steps: Vec<ReplayStep<V>>,
}

impl<V> ReplayReport<V> {
    /// Every callback that fired, in order, across all the steps.
    pub fn events(&self) -> impl Iterator<Item = &ReplayEvent<V>> {
        self.steps.iter().flat_map(|step| step.events.iter())
    }

    /// The item picked last, if any.
    pub fn last_selected(&self) -> Option<&Item<V>> {
        self.events()
            .filter_map(|event| match event {
                ReplayEvent::Select(item) => Some(item),
                ReplayEvent::Highlight(_) => None,
            })
            .last()
    }

    pub fn final_frame(&self) -> &RenderedFrame {
        self.steps
            .last()
            .map_or(&self.initial_frame, |step| &step.frame)
    }
}

/// Feed `keys` to a fresh [`Navigator`] one at a time, and capture the frame after each
/// key, along with the callbacks it fired. Nothing here touches the terminal.
pub fn run_replay<V>(
    options: NavigatorOptions,
    items: &[Item<V>],
    keys: &[KeyPress],
) -> ReplayReport<V>
where
    V: Clone + PartialEq + Debug + Send + 'static,
{
    let (sender, receiver) = mpsc::channel::<ReplayEvent<V>>();
    let highlight_sender = sender.clone();
    let select_sender = sender;

    let mut navigator = Navigator::new(options)
        .on_highlight(move |item| {
            // The receiver outlives the navigator.
            highlight_sender.send(ReplayEvent::Highlight(item.clone())).ok();
        })
        .on_select(move |item| {
            select_sender.send(ReplayEvent::Select(item.clone())).ok();
        });

    let initial_frame = navigator.render(items);

    let steps = keys
        .iter()
        .map(|key_press| {
            let propagation =
                navigator.handle_input_event(items, InputEvent::Keyboard(*key_press));
            ReplayStep {
                key_press: *key_press,
                propagation,
                events: receiver.try_iter().collect(),
                frame: navigator.render(items),
            }
        })
        .collect();

    ReplayReport {
        initial_frame,
        steps,
    }
}

/// Each label is also used as the value.
pub fn items_from_labels(labels: impl IntoIterator<Item = String>) -> Vec<Item<String>> {
    labels.into_iter().map(Item::from).collect()
}

/// Parse a JSON array of `{ "label", "value", "key"? }` objects.
///
/// # Errors
///
/// Returns [`SelectListError::ParseItemsFile`] if the JSON does not match; `path` is only
/// used in the error.
pub fn parse_items_json(path: &Path, json: &str) -> Result<Vec<Item<String>>, SelectListError> {
    serde_json::from_str(json).map_err(|source| SelectListError::ParseItemsFile {
        path: path.to_path_buf(),
        source,
    })
}

/// # Errors
///
/// Returns an error if the file can't be read, or isn't a JSON array of items.
pub fn load_items_from_json(path: &Path) -> Result<Vec<Item<String>>, SelectListError> {
    let json =
        std::fs::read_to_string(path).map_err(|source| SelectListError::ReadItemsFile {
            path: path.to_path_buf(),
            source,
        })?;
    parse_items_json(path, &json)
}

impl<V: Debug> Display for ReplayEvent<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayEvent::Highlight(item) => {
                write!(f, "on_highlight: {} ({:?})", item.label, item.value)
            }
            ReplayEvent::Select(item) => {
                write!(f, "on_select: {} ({:?})", item.label, item.value)
            }
        }
    }
}

impl<V: Debug> Display for ReplayReport<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "── initial ──")?;
        writeln!(f, "{}", self.initial_frame)?;
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(
                f,
                "── #{} {:?} -> {:?} ──",
                index + 1,
                step.key_press,
                step.propagation
            )?;
            for event in &step.events {
                writeln!(f, "   {event}")?;
            }
            writeln!(f, "{}", step.frame)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, parse_key_script, test_fixtures::make_items};

    fn replay(limit: Option<usize>, labels: &[&str], script: &str) -> ReplayReport<String> {
        let options = NavigatorOptions {
            limit,
            ..Default::default()
        };
        run_replay(options, &make_items(labels), &parse_key_script(script).unwrap())
    }

    fn event_labels(report: &ReplayReport<String>) -> Vec<String> {
        report.events().map(ToString::to_string).collect()
    }

    #[test]
    fn test_replay_with_limit() {
        let report = replay(Some(3), &["A", "B", "C", "D", "E"], "down down tab enter");

        assert_eq2!(report.steps.len(), 4);
        assert_eq2!(report.initial_frame.lines(), vec!["❯ A", "  B", "  C"]);
        assert_eq2!(
            event_labels(&report),
            vec![
                "on_highlight: B (\"b\")",
                "on_highlight: C (\"c\")",
                "on_highlight: D (\"d\")",
                "on_select: D (\"d\")",
            ]
        );
        assert_eq2!(report.final_frame().lines(), vec!["  B", "  C", "❯ D"]);
        assert_eq2!(report.last_selected().map(|it| it.value.as_str()), Some("d"));
        assert_eq2!(report.steps[3].propagation, EventPropagation::Consumed);
    }

    #[test]
    fn test_replay_out_of_range_digit_propagates() {
        let report = replay(None, &["A", "B"], "3 2");
        assert_eq2!(report.steps[0].propagation, EventPropagation::Propagate);
        assert!(report.steps[0].events.is_empty());
        assert_eq2!(report.last_selected().map(|it| it.label.as_str()), Some("B"));
    }

    #[test]
    fn test_replay_without_keys() {
        let report = replay(None, &["A"], "");
        assert!(report.steps.is_empty());
        assert_eq2!(report.final_frame(), &report.initial_frame);
        assert_eq2!(report.to_string(), "── initial ──\n❯ A\n");
    }

    #[test]
    fn test_parse_items_json() {
        let path = Path::new("items.json");
        let items = parse_items_json(
            path,
            r#"[{ "label": "One", "value": "1" }, { "label": "Two", "value": "2", "key": "k2" }]"#,
        )
        .unwrap();
        assert_eq2!(items, vec![Item::new("One", "1".to_string()), Item::new("Two", "2".to_string()).with_key("k2")]);

        let error = parse_items_json(path, r#"{ "label": "One" }"#).unwrap_err();
        assert!(matches!(error, SelectListError::ParseItemsFile { .. }));
    }

    #[test]
    fn test_load_missing_items_file() {
        let error = load_items_from_json(Path::new("/this/path/does/not/exist.json")).unwrap_err();
        assert!(matches!(error, SelectListError::ReadItemsFile { .. }));
    }

    #[test]
    fn test_items_from_labels() {
        let items = items_from_labels(["x".to_string(), "y".to_string()]);
        assert_eq2!(items, crate::items!["x", "y"]);
    }
}
