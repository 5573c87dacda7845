// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Create a file appender that never rolls over, for the given file path. The file is
/// created (and appended to) right away.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
/// - Insufficient permissions to create the file or directory
pub fn try_create_file_appender(
    path_str: &str,
) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access parent folder of {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;
    // A bare file name (eg: `log.txt`) has an empty parent.
    let parent = if parent.as_os_str().is_empty() { Path::new(".") } else { parent };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}
