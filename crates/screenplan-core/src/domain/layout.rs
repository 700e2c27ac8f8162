//! Screen-space placement and overlap detection.
//!
//! The layout engine assigns every monitor an absolute rectangle in one
//! shared 2D coordinate space ("screen space"). The root monitor — the one
//! with no position directive — is anchored with its top-left corner at
//! (0, 0); every other monitor is placed against the already-placed rectangle
//! of the monitor its directive references:
//!
//! ```text
//!        ┌─────────┐
//!        │  above  │           direction fixes one axis
//!        └─────────┘           (x for left-of/right-of,
//! ┌─────────┬─────────┐         y for above/below);
//! │ left-of │  root   │        alignment resolves the other
//! │         │  (0,0)  │
//! └─────────┴─────────┘
//! ```
//!
//! All arithmetic happens in scaled (logical) pixels, so a HiDPI monitor with
//! `scale = 2.0` occupies half its physical footprint in screen space.
//! Coordinates are signed: anything left of or above the root is negative.
//!
//! Placement cannot fail geometrically, but nothing stops two directives
//! from landing monitors on the same spot, so the final step is an
//! exhaustive all-pairs overlap sweep. Overlap reporting is deliberately not
//! fail-fast: every offending pair is collected, and the error carries the
//! full placement map so callers can still show what was computed.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use tracing::debug;

use super::directive::{split_position, Alignment, Direction, DirectiveError};
use super::graph::{GraphError, MonitorGraph};
use super::monitor::Config;

/// Errors produced while resolving monitor rectangles.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Dependency graph construction or ordering failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A position directive could not be parsed at placement time.
    #[error(transparent)]
    Directive(#[from] DirectiveError),

    /// The placement order names a monitor with no configuration entry, or
    /// requires a parent rectangle that has not been computed. Orders
    /// produced by [`MonitorGraph::placement_order`] never trigger this.
    #[error("placement order does not match the configuration at monitor '{name}'")]
    OrderMismatch { name: String },

    /// Two or more placed rectangles intersect. Carries the full placement
    /// map and every offending pair for diagnostics.
    #[error("{}", overlap_summary(.placements, .pairs))]
    Overlap {
        placements: BTreeMap<String, Rect>,
        pairs: Vec<(String, String)>,
    },
}

/// A monitor's resolved placement: top-left corner plus scaled size.
///
/// Sizes arrive capped at `i32::MAX` by the scaling step, so the edge
/// arithmetic below cannot wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// X coordinate of the top-left corner in screen space (may be negative).
    pub x: i32,
    /// Y coordinate of the top-left corner in screen space (may be negative).
    pub y: i32,
    /// Width in scaled pixels.
    pub width: u32,
    /// Height in scaled pixels.
    pub height: u32,
}

impl Rect {
    /// Returns the rightmost X coordinate (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Returns the bottommost Y coordinate (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Returns `true` if this rectangle overlaps with `other`.
    ///
    /// Edges that exactly touch do not count as overlap — adjacent monitors
    /// are the expected outcome, not an error.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) {}x{}", self.x, self.y, self.width, self.height)
    }
}

/// The computed layout: placement order plus one rectangle per monitor.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    /// Topological placement order; the first entry is the root.
    pub order: Vec<String>,
    /// Resolved rectangle per monitor name.
    pub placements: BTreeMap<String, Rect>,
}

/// Runs the full pipeline: dependency graph → placement order → rectangles.
///
/// # Errors
///
/// Returns [`LayoutError::Graph`] for structural problems (malformed or
/// unknown references, cycles, disconnection) and [`LayoutError::Overlap`]
/// when the resolved rectangles intersect.
///
/// # Examples
///
/// ```
/// use screenplan_core::domain::layout::plan;
/// use screenplan_core::domain::monitor::{Config, Monitor};
///
/// let config: Config = toml::from_str(
///     r#"
///     [monitors.main]
///     width = 1920
///     height = 1080
///
///     [monitors.side]
///     width = 1920
///     height = 1080
///     position = "right-of main"
///     align = "top"
///     "#,
/// )
/// .unwrap();
///
/// let plan = plan(&config).unwrap();
/// assert_eq!(plan.order, vec!["main", "side"]);
/// assert_eq!(plan.placements["side"].x, 1920);
/// ```
pub fn plan(config: &Config) -> Result<LayoutPlan, LayoutError> {
    let graph = MonitorGraph::from_config(config)?;
    let order = graph.placement_order()?;
    let placements = generate_positions(config, &order)?;
    Ok(LayoutPlan { order, placements })
}

/// Resolves one rectangle per monitor, walking `order` front to back.
///
/// The first monitor is placed at the origin; every later monitor is placed
/// against the rectangle of the monitor its directive references, which the
/// topological order guarantees is already computed. After all rectangles
/// are known, every pair is checked for overlap.
///
/// # Errors
///
/// Returns [`LayoutError::Directive`] when a position fails to parse,
/// [`LayoutError::OrderMismatch`] when the order and configuration disagree,
/// and [`LayoutError::Overlap`] — carrying the complete placement map and
/// every offending pair in lexicographic order — when rectangles intersect.
pub fn generate_positions(
    config: &Config,
    order: &[String],
) -> Result<BTreeMap<String, Rect>, LayoutError> {
    let mut placements: BTreeMap<String, Rect> = BTreeMap::new();

    for (index, name) in order.iter().enumerate() {
        let monitor = config
            .monitors
            .get(name)
            .ok_or_else(|| LayoutError::OrderMismatch { name: name.clone() })?;
        let width = monitor.scaled_width();
        let height = monitor.scaled_height();

        // The root anchors the plan at the origin.
        if index == 0 {
            let rect = Rect { x: 0, y: 0, width, height };
            debug!(monitor = %name, rect = %rect, "placed root monitor");
            placements.insert(name.clone(), rect);
            continue;
        }

        let Some((direction_token, parent)) = split_position(&monitor.position)? else {
            // A second unpositioned monitor: this order did not come from a
            // connected dependency graph.
            return Err(LayoutError::OrderMismatch { name: name.clone() });
        };
        let direction = Direction::parse(direction_token)?;
        let alignment = Alignment::for_direction(&monitor.align, direction)?;

        let parent_rect = placements
            .get(parent)
            .copied()
            .ok_or_else(|| LayoutError::OrderMismatch {
                name: parent.to_string(),
            })?;

        let rect = place(direction, alignment, parent_rect, width, height);
        debug!(monitor = %name, parent = %parent, rect = %rect, "placed monitor");
        placements.insert(name.clone(), rect);
    }

    let pairs = collect_overlaps(&placements);
    if !pairs.is_empty() {
        return Err(LayoutError::Overlap { placements, pairs });
    }

    Ok(placements)
}

// ── Placement arithmetic ──────────────────────────────────────────────────────

/// Computes a monitor's rectangle from its parent's rectangle, the directive
/// direction, the alignment, and the monitor's scaled size.
fn place(
    direction: Direction,
    alignment: Alignment,
    parent: Rect,
    width: u32,
    height: u32,
) -> Rect {
    let w = width as i32;
    let h = height as i32;

    let (x, y) = match direction {
        // Horizontal directions fix x; alignment resolves y.
        Direction::LeftOf => (parent.x - w, aligned_y(alignment, parent, h)),
        Direction::RightOf => (parent.right(), aligned_y(alignment, parent, h)),
        // Vertical directions fix y; alignment resolves x.
        Direction::Above => (aligned_x(alignment, parent, w), parent.y - h),
        Direction::Below => (aligned_x(alignment, parent, w), parent.bottom()),
    };

    Rect { x, y, width, height }
}

/// Resolves the y coordinate left unset by a horizontal direction.
fn aligned_y(alignment: Alignment, parent: Rect, height: i32) -> i32 {
    match alignment {
        Alignment::Top => parent.y,
        Alignment::Bottom => parent.bottom() - height,
        // Center: offset so the vertical midlines coincide. The remaining
        // alignments are invalid for a horizontal direction and never reach
        // here; they would centre too.
        _ => parent.y - round_half(height - parent.height as i32),
    }
}

/// Resolves the x coordinate left unset by a vertical direction.
fn aligned_x(alignment: Alignment, parent: Rect, width: i32) -> i32 {
    match alignment {
        Alignment::Left => parent.x,
        Alignment::Right => parent.right() - width,
        // Center: offset so the horizontal midlines coincide.
        _ => parent.x - round_half(width - parent.width as i32),
    }
}

/// `value / 2` rounded to the nearest integer, ties away from zero.
fn round_half(value: i32) -> i32 {
    (f64::from(value) / 2.0).round() as i32
}

// ── Overlap detection ─────────────────────────────────────────────────────────

/// Collects every overlapping unordered pair. Pairs come out in lexicographic
/// order because the map iterates sorted by name.
fn collect_overlaps(placements: &BTreeMap<String, Rect>) -> Vec<(String, String)> {
    let entries: Vec<(&String, &Rect)> = placements.iter().collect();
    let mut pairs = Vec::new();

    for (i, (name_a, rect_a)) in entries.iter().enumerate() {
        for (name_b, rect_b) in entries.iter().skip(i + 1) {
            if rect_a.overlaps(rect_b) {
                pairs.push(((*name_a).clone(), (*name_b).clone()));
            }
        }
    }

    pairs
}

/// Formats the aggregated overlap message: every offending pair with its
/// rectangles.
fn overlap_summary(placements: &BTreeMap<String, Rect>, pairs: &[(String, String)]) -> String {
    let describe = |name: &String| match placements.get(name) {
        Some(rect) => format!("'{name}' {rect}"),
        None => format!("'{name}'"),
    };
    let listed: Vec<String> = pairs
        .iter()
        .map(|(a, b)| format!("{} and {}", describe(a), describe(b)))
        .collect();
    format!("placed monitors overlap: {}", listed.join("; "))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
