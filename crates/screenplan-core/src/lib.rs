//! # screenplan-core
//!
//! Library for computing absolute monitor positions from a declarative
//! configuration. Users describe each monitor's size, scale factor, and a
//! position relative to one other monitor ("right-of main", "above desk");
//! this crate resolves that description into concrete rectangles in a single
//! shared coordinate space, or explains precisely why it cannot.
//!
//! This crate holds the pure planning logic. Reading configuration files and
//! rendering results is the job of the `screenplan` binary crate.
//!
//! # How planning works (for beginners)
//!
//! Monitor positions form a dependency chain: to place "B right-of A" you
//! first need A's rectangle. The pipeline therefore runs in stages:
//!
//! - **Parse** each monitor's position directive into a direction plus the
//!   name of the referenced monitor, and check the alignment is compatible
//!   with the direction (a monitor placed `right-of` another can align
//!   `top`, `bottom`, or `center` — `left`/`right` only make sense for
//!   `above`/`below`).
//!
//! - **Order** the monitors by building a dependency graph and sorting it
//!   topologically. Unknown references, cycles ("A right-of B, B right-of
//!   A"), and islands not connected to the root are all rejected here. Ties
//!   break lexicographically, so the same configuration always produces the
//!   same order.
//!
//! - **Place** each monitor against its already-placed reference. The root
//!   anchors at (0, 0); coordinates grow right and down, so monitors left of
//!   or above the root get negative positions. Sizes are divided by the
//!   scale factor first, which is how a 4K panel at `scale = 2.0` tiles
//!   cleanly next to a 1080p one.
//!
//! - **Check** every pair of placed rectangles for overlap. Touching edges
//!   are fine (that is what adjacent monitors do); shared area is an error
//!   that names every offending pair.

// Declare the top-level module.  Rust will look for it in a subdirectory
// with the same name (src/domain/mod.rs).
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `screenplan_core::plan` instead of `screenplan_core::domain::layout::plan`.
pub use domain::directive::{
    check_direction_alignment, split_position, Alignment, Axis, Direction, DirectiveError,
};
pub use domain::graph::{GraphError, MonitorGraph};
pub use domain::layout::{generate_positions, plan, LayoutError, LayoutPlan, Rect};
pub use domain::monitor::{Config, Monitor};
