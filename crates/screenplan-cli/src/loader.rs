//! TOML configuration loading for the `screenplan` binary.
//!
//! Reads a monitor configuration file, fills in defaults, and validates every
//! entry before the planning pipeline runs:
//!
//! ```toml
//! [monitors.main]
//! width = 2560
//! height = 1440
//!
//! [monitors.side]
//! width = 1920
//! height = 1080
//! scale = 1.0
//! position = "right-of main"
//! align = "top"
//! ```
//!
//! # Defaults
//!
//! - `align` defaults to `"center"` when a position is given, since center is
//!   valid for every direction.
//! - `scale` defaults to `1.0`, whether the key is absent or written as `0`.
//!
//! # Validation
//!
//! Width and height must be nonzero, the scale positive, and each
//! position/align pair well-formed and compatible. Structural problems that
//! need the whole configuration at once (unknown references, cycles,
//! disconnected monitors) are left to the planning stage.

use std::path::{Path, PathBuf};

use thiserror::Error;

use screenplan_core::{check_direction_alignment, split_position, Config, DirectiveError};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred. A missing config file is an error:
    /// there is no sensible default layout to fall back to.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A monitor entry has a zero dimension or a nonpositive scale.
    #[error("monitor '{name}' width, height, and scale must be specified and nonzero")]
    InvalidDimensions { name: String },

    /// A position or alignment failed validation.
    #[error(transparent)]
    Directive(#[from] DirectiveError),
}

/// Loads a monitor configuration from `path`, applies defaults, and validates
/// every entry.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read (including when
/// it does not exist), [`ConfigError::Parse`] for malformed TOML,
/// [`ConfigError::InvalidDimensions`] for zero sizes or nonpositive scales,
/// and [`ConfigError::Directive`] for bad position/align pairs. Monitors are
/// checked in name order, so the first error is deterministic.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config: Config = toml::from_str(&content)?;
    apply_defaults(&mut config);
    validate(&config)?;

    Ok(config)
}

/// Fills in the documented defaults for every monitor in `config`.
///
/// Positioned monitors with no alignment get `"center"`; a scale of zero
/// (absent, or written as `0`) becomes `1.0`.
pub fn apply_defaults(config: &mut Config) {
    for monitor in config.monitors.values_mut() {
        if !monitor.position.is_empty() && monitor.align.is_empty() {
            monitor.align = "center".to_string();
        }
        if monitor.scale == 0.0 {
            monitor.scale = 1.0;
        }
    }
}

/// Checks dimensions and position/align compatibility for every monitor.
fn validate(config: &Config) -> Result<(), ConfigError> {
    for (name, monitor) in &config.monitors {
        // NaN slips past every ordering comparison, so it gets its own check.
        if monitor.width == 0
            || monitor.height == 0
            || monitor.scale <= 0.0
            || monitor.scale.is_nan()
        {
            return Err(ConfigError::InvalidDimensions { name: name.clone() });
        }

        let direction = match split_position(&monitor.position)? {
            Some((direction, _)) => direction,
            None => "",
        };
        check_direction_alignment(direction, &monitor.align)?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
