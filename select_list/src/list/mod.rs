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

// Attach sources.
pub mod direction;
pub mod event_propagation;
pub mod input_classifier;
pub mod item;
pub mod layout;
pub mod navigator;
pub mod navigator_state;
pub mod renderers;
pub mod windowing;

// Re-export.
pub use direction::*;
pub use event_propagation::*;
pub use input_classifier::*;
pub use item::*;
pub use layout::*;
pub use navigator::*;
pub use navigator_state::*;
pub use renderers::*;
pub use windowing::*;
