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

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::{DEFAULT_LOG_FILE_NAME, Direction, NavigatorOptions, TracingConfig};

#[derive(Debug, Parser)]
#[command(bin_name = "sl")]
#[command(about = "📜 Replay a key script against a select list, and print every frame")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  sl [\x1b[34mOptions\x1b[0m] [\x1b[32mItems\x1b[0m]...\n\n{all-args}\n"
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[arg(
        value_name = "ITEMS",
        help = "Labels of the items to choose from, each label is also its value"
    )]
    pub items: Vec<String>,

    #[arg(
        long,
        short = 'f',
        value_name = "PATH",
        conflicts_with = "items",
        help = "Read items from a JSON file: [{\"label\": \"One\", \"value\": \"1\", \"key\": \"k1\"}]"
    )]
    pub items_file: Option<PathBuf>,

    #[command(flatten)]
    pub navigator_options: NavigatorOptionsArg,

    #[arg(
        long,
        short = 'k',
        value_name = "SCRIPT",
        help = "Space separated keys to replay, eg: \"down down tab shift+tab 2 enter\""
    )]
    pub keys: Option<String>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct NavigatorOptionsArg {
    #[arg(
        long,
        short = 'm',
        help = "Maximum number of visible items, 0 shows all of them"
    )]
    pub limit: Option<usize>,

    #[arg(long, short = 'd', value_enum, default_value_t = Direction::Column)]
    pub direction: Direction,

    #[arg(
        long,
        short = 'i',
        default_value_t = 0,
        help = "Index of the item that is highlighted at the start"
    )]
    pub initial_index: usize,

    #[arg(long, help = "Start without focus, so every key is ignored")]
    pub unfocused: bool,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        requires = "enable_logging",
        help = "Log to this file instead of `log.txt`"
    )]
    pub log_file: Option<String>,
}

impl From<&NavigatorOptionsArg> for NavigatorOptions {
    fn from(arg: &NavigatorOptionsArg) -> Self {
        NavigatorOptions {
            is_focused: !arg.unfocused,
            initial_index: arg.initial_index,
            direction: arg.direction,
            limit: arg.limit,
        }
    }
}

impl GlobalOption {
    /// [`TracingConfig::off`] unless logging is enabled.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        if self.enable_logging {
            TracingConfig::new_file(Some(
                self.log_file
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ))
        } else {
            TracingConfig::off()
        }
    }
}
