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

//! Backend independent input events. Hosts either convert `crossterm` events (see the
//! [`TryFrom`] impls in [`keypress`] and [`input_event`]), fill in a [`KeyFlags`], or
//! parse a key script with [`parse_key_script`].

// Attach sources.
pub mod input_event;
pub mod key_flags;
pub mod key_spec;
pub mod keypress;
pub mod modifier_keys_mask;

// Re-export.
pub use input_event::*;
pub use key_flags::*;
pub use key_spec::*;
pub use keypress::*;
pub use modifier_keys_mask::*;
