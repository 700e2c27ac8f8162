//! # screenplan-cli
//!
//! Library behind the `screenplan` binary: TOML configuration loading with
//! defaults and validation, plus plan rendering for terminal output. The
//! planning itself lives in `screenplan-core`; this crate only adds the
//! filesystem and presentation layers around it.
//!
//! Keeping this logic in a library (rather than in `main.rs`) lets the
//! integration tests drive the exact code paths the binary uses.

pub mod loader;
pub mod report;

pub use loader::{apply_defaults, load_config, ConfigError};
pub use report::render_plan;
