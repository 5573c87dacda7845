// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_core::LevelFilter;

use crate::{TracingConfig, ok};

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Configure this using [`mod@crate::tracing_config_options`], which converts many
///   types into [`TracingConfig`].
///
/// Logging is **DISABLED** by **default**. If this is called with a level filter of
/// [`LevelFilter::OFF`] then nothing is installed.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, which is active until the returned guard is dropped.
/// - This is great for tests.
/// - Configure this using [`mod@crate::tracing_config_options`].
///
/// Logging is **DISABLED** by **default**. If this is called with a level filter of
/// [`LevelFilter::OFF`] then nothing is installed and `None` is returned.
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
