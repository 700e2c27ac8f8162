//! Domain logic for monitor layout planning.
//!
//! This module contains pure business logic with no infrastructure
//! dependencies: no filesystem access, no CLI parsing, no process exit codes.
//! Everything here can be compiled and tested on any platform without
//! external setup.
//!
//! # How the pipeline fits together (for beginners)
//!
//! A layout starts as a declarative description: each monitor states its
//! physical size, an optional scale factor, and — except for one root
//! monitor — where it sits relative to a neighbour ("right-of main",
//! "above desk"). Turning that into absolute coordinates takes four stages,
//! one per submodule:
//!
//! 1. [`monitor`] — the configuration data model: sizes, scale, and the raw
//!    position/align strings as users write them.
//! 2. [`directive`] — parsing and validating those strings: which direction
//!    tokens exist, and which alignments are compatible with which
//!    directions.
//! 3. [`graph`] — the dependency graph between monitors. References must
//!    exist, cycles are rejected, and a deterministic placement order is
//!    derived so every monitor is placed after the one it refers to.
//! 4. [`layout`] — the actual geometry: rectangles in one shared coordinate
//!    space, plus an exhaustive overlap check over the finished plan.

/// Position directive parsing and direction/alignment compatibility rules.
pub mod directive;

/// Monitor dependency graph: reference validation, cycle rejection, and
/// deterministic placement ordering.
pub mod graph;

/// The configuration data model: [`monitor::Monitor`] and [`monitor::Config`].
pub mod monitor;

/// Rectangle placement and overlap detection.
///
/// See [`layout::plan`] for the full pipeline entry point.
pub mod layout;
