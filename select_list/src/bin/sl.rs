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

//! Headless replay driver for the select list. For example:
//!
//! ```shell
//! sl --limit 3 --keys "down down tab enter" A B C D E
//! sl --items-file items.json --direction row --keys "right right 1"
//! ```

use clap::Parser;
use r3bl_select_list::{CLIArg, Item, KeyPress, NavigatorOptions, SelectListError,
                       items_from_labels, load_items_from_json, parse_key_script,
                       run_replay, try_initialize_logging_global};

fn main() -> miette::Result<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    try_initialize_logging_global(cli_arg.global_options.tracing_config())?;
    enable_logging.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let items = try_load_items(&cli_arg)?;
    let keys = try_parse_keys(cli_arg.keys.as_deref())?;
    let options = NavigatorOptions::from(&cli_arg.navigator_options);

    let report = run_replay(options, &items, &keys);
    print!("{report}");

    enable_logging.then(|| {
        tracing::debug!(
            message = "Stop logging...",
            steps = %report.steps.len(),
            last_selected = ?report.last_selected()
        );
    });

    Ok(())
}

fn try_load_items(cli_arg: &CLIArg) -> Result<Vec<Item<String>>, SelectListError> {
    match &cli_arg.items_file {
        Some(path) => load_items_from_json(path),
        None => Ok(items_from_labels(cli_arg.items.iter().cloned())),
    }
}

/// No `--keys` at all just prints the initial frame. An empty `--keys ""` is a mistake.
fn try_parse_keys(maybe_script: Option<&str>) -> miette::Result<Vec<KeyPress>> {
    let Some(script) = maybe_script else {
        return Ok(vec![]);
    };

    let keys = parse_key_script(script)?;
    if keys.is_empty() {
        return Err(SelectListError::EmptyKeyScript.into());
    }

    Ok(keys)
}
