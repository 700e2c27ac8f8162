//! screenplan — entry point.
//!
//! Computes absolute monitor positions from a declarative TOML configuration.
//! Each monitor states its physical size, an optional HiDPI scale, and where
//! it sits relative to one other monitor; the planner resolves that into
//! concrete rectangles and prints one line per monitor.
//!
//! # Usage
//!
//! ```text
//! screenplan [OPTIONS] [CONFIG]
//!
//! Arguments:
//!   [CONFIG]  Path to the monitor configuration file [default: screenplan.toml]
//!
//! Options:
//!   --check   Validate the configuration and exit without printing the plan
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable            | Default           | Description                 |
//! |---------------------|-------------------|-----------------------------|
//! | `SCREENPLAN_CONFIG` | `screenplan.toml` | Configuration file path     |
//! | `RUST_LOG`          | `info`            | Log filter (tracing syntax) |
//!
//! # Exit behaviour
//!
//! Exits nonzero with a full error chain on any failure: unreadable or
//! malformed config, invalid directives, unknown references, cycles,
//! disconnected monitors, or overlapping placements.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use screenplan_cli::{loader, report};
use screenplan_core::plan;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Monitor layout planner.
///
/// Resolves a declarative monitor configuration into absolute screen-space
/// rectangles, or explains why the configuration cannot be laid out.
#[derive(Debug, Parser)]
#[command(
    name = "screenplan",
    about = "Compute absolute monitor positions from a declarative layout config",
    version
)]
struct Cli {
    /// Path to the monitor configuration file.
    #[arg(default_value = "screenplan.toml", env = "SCREENPLAN_CONFIG")]
    config: PathBuf,

    /// Validate the configuration and exit without printing the plan.
    ///
    /// Runs the full pipeline (parsing, graph checks, placement, overlap
    /// detection) so a passing check guarantees the config is usable.
    #[arg(long)]
    check: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // `EnvFilter::try_from_default_env()` reads the `RUST_LOG` environment
    // variable.  If it is absent or invalid, fall back to `info` level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = loader::load_config(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    info!(
        path = %cli.config.display(),
        monitors = config.monitors.len(),
        "configuration loaded"
    );

    let plan = plan(&config).context("failed to compute monitor layout")?;

    if cli.check {
        info!("configuration is valid");
        return Ok(());
    }

    print!("{}", report::render_plan(&plan));
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
