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

//! # r3bl-select-list
//!
//! A keyboard driven select list for terminal apps. You give it an ordered list of
//! labeled [`Item`]s, and it keeps track of which one is highlighted, turns key presses
//! into highlight changes, and tells you (via callbacks) when the highlight moves and
//! when the user picks something.
//!
//! The interesting part is the [`Navigator`] state machine. It is described by two
//! numbers, captured in [`NavigatorState`]:
//!
//! 1. `selected_index` - the slot *inside the visible window* that is highlighted.
//! 2. `rotate_index` - how far the full list is rotated before the window is cut out of
//!    it. This is only used when a `limit` is set and there are more items than fit.
//!
//! ```text
//!  items:    A  B  C  D  E        limit = 3
//!
//!  rotate_index = 0          rotate_index = -1 (stored as 4)
//!  ┌─────────┐                  ┌─────────┐
//!  │ A  B  C │  D  E          A │ B  C  D │  E
//!  └─────────┘                  └─────────┘
//!          ↑ selected_index = 2         ↑ selected_index = 2
//! ```
//!
//! ## Key bindings
//!
//! | Class         | Keys                                                      |
//! | ------------- | --------------------------------------------------------- |
//! | Previous      | `k`, `Shift+Tab`, `Up` (column), `Left` (row)              |
//! | Next          | `j`, `Tab`, `Down` (column), `Right` (row)                 |
//! | Direct select | `1` to `9` (slot in the visible window)                   |
//! | Confirm       | `Enter`                                                   |
//!
//! Only `Tab` and `Shift+Tab` wrap around when the highlight is at the edge of the
//! window. All the other navigation keys stop there.
//!
//! ## How to use it as a library?
//!
//! ```rust
//! use r3bl_select_list::*;
//!
//! let items: Vec<Item<String>> =
//!     ["one", "two", "three", "four"].into_iter().map(Item::from).collect();
//!
//! let mut navigator = Navigator::new(NavigatorOptions {
//!     limit: Some(3),
//!     ..Default::default()
//! })
//! .on_select(|item| println!("picked: {}", item.label));
//!
//! navigator.handle_input_event(&items, InputEvent::Keyboard(keypress!(@special SpecialKey::Down)));
//! navigator.handle_input_event(&items, InputEvent::Keyboard(keypress!(@special SpecialKey::Enter)));
//!
//! println!("{}", navigator.render(&items));
//! ```
//!
//! ## How to use it as a binary?
//!
//! The `sl` binary is a headless replay driver. It feeds a key script to a navigator and
//! prints every frame along with the callbacks that fired. It never touches the terminal
//! (no raw mode), so it is handy for trying out the key bindings and in CI.
//!
//! ```shell
//! cargo run --bin sl -- --limit 3 --keys "down down tab enter" A B C D E
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
// Enforce strict error handling in production code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod decl_macros;
pub mod error;
pub mod input;
pub mod list;
pub mod log_support;
pub mod replay;
pub mod stack_alloc_types;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use error::*;
pub use input::*;
pub use list::*;
pub use log_support::*;
pub use replay::*;
pub use stack_alloc_types::*;

/// Enable verbose `tracing::debug!` output from the navigator. You can use `tail -f
/// log.txt` to watch the logs, after enabling logging in the `sl` binary.
pub const DEVELOPMENT_MODE: bool = false;
