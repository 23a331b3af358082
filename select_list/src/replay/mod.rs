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

//! Headless replay of a key script against a [`crate::Navigator`]. This is what the
//! `sl` binary runs, and it is usable from tests without spawning a process.

// Attach sources.
pub mod clap_config;
pub mod replay_impl;

// Re-export.
pub use clap_config::*;
pub use replay_impl::*;
