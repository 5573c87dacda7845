// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`tracing`] setup for binaries and tests that use this crate. The library itself only
//! emits events, and they go nowhere until one of the functions in [`log_public_api`] is
//! called.

// Attach sources.
pub mod log_public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_public_api::*;
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
