// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

/// Configure the tracing logging to suit your needs. You can display the logs to:
/// 1. a file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level. Pass it (or anything that
/// converts into it, see [`tracing_config_options`]) to
/// [`crate::try_initialize_logging_global()`] or
/// [`crate::try_initialize_logging_thread_local()`].
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `String` is the file path to use for the log file. Eg: `/tmp/bounded_array.log` or
///   `log.txt`.
/// - [`DisplayPreference`] is the preferred display to use for logging.
#[derive(Debug, Clone, PartialEq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

/// Instead of having lots of arguments to the logging init functions, they both receive a
/// type that implements [`Into<TracingConfig>`]. Here are some examples of what is
/// possible:
///
/// ```
/// use r3bl_bounded_array::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let config_1: TracingConfig = tracing::Level::DEBUG.into();
/// let config_2: TracingConfig = tracing_core::LevelFilter::INFO.into();
/// let config_3: TracingConfig = DisplayPreference::Stderr.into();
/// let config_4: TracingConfig = WriterConfig::File("log.txt".to_string()).into();
///
/// let composed = config_2 + config_3;
/// assert_eq!(
///     composed.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "log.txt".to_string())
/// );
/// # let _unused = (config_1, config_4);
/// ```
pub mod tracing_config_options {
    use super::{Add, DisplayPreference, LevelFilter, TracingConfig, WriterConfig};

    pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// Merge two [`TracingConfig`] instances together. The more verbose level filter wins.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`] instances together. The `rhs` clobbers `self` where
    /// they collide, ie the value in `rhs` has higher specificity.
    ///
    /// - `{a: "foo"} + {a: "bar"} = {a: "bar"}`.
    /// - `{a: None } + {a: "bar"} = {a: "bar"}`.
    /// - `{a: "foo"} + {a: None } = {a: "foo"}`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision merge.
                (None, wc_rhs) => wc_rhs,
                (wc_lhs, None) => wc_lhs,

                // Combine display and file. When lhs already has both, the matching half
                // is replaced by rhs.
                (Display(dp_lhs) | DisplayAndFile(dp_lhs, _), File(f_rhs)) => {
                    DisplayAndFile(dp_lhs, f_rhs)
                }
                (File(f_lhs) | DisplayAndFile(_, f_lhs), Display(dp_rhs)) => {
                    DisplayAndFile(dp_rhs, f_lhs)
                }

                // Collision (rhs has higher specificity).
                (Display(_), Display(dp_rhs)) => Display(dp_rhs),
                (File(_), File(f_rhs)) => File(f_rhs),
                (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp_rhs, f_rhs)) => {
                    DisplayAndFile(dp_rhs, f_rhs)
                }
            }
        }
    }

}
