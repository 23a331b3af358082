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

/// Tells the host what became of an input event that was given to
/// [`crate::Navigator::handle_input_event`]. If it has been consumed, is a render
/// necessary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPropagation {
    /// The highlight moved. The host should render again.
    ConsumedRender,
    /// The navigator handled the key, but nothing visible changed.
    Consumed,
    /// The navigator ignored the event. The host may route it elsewhere.
    Propagate,
}
