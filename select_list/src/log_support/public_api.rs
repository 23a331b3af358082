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

use tracing::dispatcher;
use tracing_core::LevelFilter;

use super::TracingConfig;

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps, like the `sl` binary.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
///
/// Logging is **DISABLED** by **default**. If this is never called with a level filter
/// other than [`LevelFilter::OFF`], then the `tracing::debug!` calls that the
/// navigator makes go nowhere.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is already
/// installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// Logging stays in effect until the returned guard is dropped. `Ok(None)` is returned
/// when the level filter is [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::{DisplayPreference, WriterConfig};

    #[test]
    #[serial]
    fn test_off_does_not_install() {
        let guard = try_initialize_logging_thread_local(TracingConfig::off()).unwrap();
        assert!(guard.is_none());

        // OFF wins over any writer config.
        let guard = try_initialize_logging_thread_local(TracingConfig {
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
            level_filter: LevelFilter::OFF,
        })
        .unwrap();
        assert!(guard.is_none());
    }

    #[test]
    #[serial]
    fn test_thread_local_writes_to_file() {
        let file_path = std::env::temp_dir()
            .join(format!("r3bl_select_list_{}", std::process::id()))
            .join("thread_local.log");
        std::fs::remove_file(&file_path).ok();

        {
            let guard = try_initialize_logging_thread_local(WriterConfig::File(
                file_path.to_string_lossy().to_string(),
            ))
            .unwrap();
            assert!(guard.is_some());
            tracing::debug!(message = "hello from the test", answer = 42);
        }

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("hello from the test"));
        assert!(contents.contains("answer=42"));
    }
}
