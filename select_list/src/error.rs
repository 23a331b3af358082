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

//! Errors raised by the outer surfaces of this crate: key script parsing, loading items
//! from disk, and setting up log files. The [`crate::Navigator`] itself never fails; every
//! key press is a total function over its state.

use std::path::PathBuf;

/// A token in a key script (eg: `"down tab shift+tab 3 enter"`) that could not be turned
/// into a [`crate::KeyPress`].
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum KeySpecParseError {
    #[error("⌨️ Key spec is empty")]
    #[diagnostic(help("Use a key name like `down`, `tab`, `shift+tab`, `enter`, or a single character"))]
    Empty,

    #[error("⌨️ Unknown key name: '{name}'")]
    #[diagnostic(help(
        "Known names: up, down, left, right, tab, backtab, enter, return, esc, backspace, home, end, pageup, pagedown, delete, space"
    ))]
    UnknownKey { name: String },

    #[error("⌨️ Unknown modifier: '{modifier}' in key spec '{spec}'")]
    #[diagnostic(help("Known modifiers: shift, ctrl, alt"))]
    UnknownModifier { modifier: String, spec: String },
}

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum SelectListError {
    #[error("📑 Could not read items file: '{}'", path.display())]
    ReadItemsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("📦 Could not parse items file: '{}'", path.display())]
    #[diagnostic(help(
        "Expected a JSON array like [{{\"label\": \"One\", \"value\": \"1\"}}, {{\"label\": \"Two\", \"value\": \"2\", \"key\": \"k2\"}}]"
    ))]
    ParseItemsFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("⌨️ Key script has no keys in it")]
    #[diagnostic(help("Pass keys separated by spaces, eg: --keys \"down down tab enter\""))]
    EmptyKeyScript,

    #[error("🔍 Could not create log file: '{path}'")]
    #[diagnostic(help("Check that the folder exists (or can be created) and is writable"))]
    CreateLogFile {
        path: String,
        #[source]
        source: tracing_appender::rolling::InitError,
    },
}
