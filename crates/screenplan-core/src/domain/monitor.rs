//! Monitor records and the monitor configuration map.
//!
//! A [`Config`] is the already-parsed description of every display device the
//! layout engine plans for. On disk it is one TOML table per monitor:
//!
//! ```toml
//! [monitors.main]
//! width = 1920
//! height = 1080
//!
//! [monitors.side]
//! width = 2560
//! height = 1440
//! scale = 2.0
//! position = "right-of main"
//! align = "top"
//! ```
//!
//! `width` and `height` are physical pixels; `scale` derives the logical
//! (scaled) size the planner actually works in. `position` and `align` are
//! optional — a monitor without a position is the layout root.
//!
//! Monitors are stored in a [`BTreeMap`] keyed by name so that every
//! iteration over a configuration is deterministic; the planner's outputs
//! must be reproducible bit-for-bit for the same input.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One display device in the configuration.
///
/// Invariants (enforced by the config loader, assumed by the planner):
/// `width > 0`, `height > 0`, `scale > 0`, and `align` is only set when
/// `position` is. Empty strings stand for unset optional fields, mirroring
/// how the fields are omitted in the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Monitor {
    /// Physical width in pixels.
    pub width: u32,
    /// Physical height in pixels.
    pub height: u32,
    /// Scale factor dividing physical pixels into logical pixels.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Relative placement directive, `"<direction> <referenceMonitor>"`.
    /// Empty for the layout root.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub position: String,
    /// Alignment along the axis the direction leaves unset. Empty means
    /// `"center"` once the loader has applied defaults.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub align: String,
}

fn default_scale() -> f64 {
    1.0
}

impl Monitor {
    /// Logical width: `round(width / scale)`, ties away from zero.
    pub fn scaled_width(&self) -> u32 {
        scale_dimension(self.width, self.scale)
    }

    /// Logical height: `round(height / scale)`, ties away from zero.
    pub fn scaled_height(&self) -> u32 {
        scale_dimension(self.height, self.scale)
    }
}

/// Scaled sizes cap at `i32::MAX` so that edge arithmetic in signed screen
/// space cannot wrap, whatever the configured physical size.
fn scale_dimension(pixels: u32, scale: f64) -> u32 {
    ((f64::from(pixels) / scale).round() as u32).min(i32::MAX as u32)
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monitor{{{}x{}@{:.2}x", self.width, self.height, self.scale)?;
        if self.position.is_empty() {
            return write!(f, "}}");
        }
        write!(f, " {} align {}}}", self.position, self.align)
    }
}

/// The full monitor configuration: a name → [`Monitor`] map.
///
/// Every `referenceMonitor` named by any monitor's `position` must be a key
/// of this map; the dependency graph builder rejects configurations that
/// violate this.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Monitors keyed by their unique configured name.
    #[serde(default)]
    pub monitors: BTreeMap<String, Monitor>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_monitor(width: u32, height: u32, scale: f64) -> Monitor {
        Monitor {
            width,
            height,
            scale,
            position: String::new(),
            align: String::new(),
        }
    }

    // ── Scaled size ───────────────────────────────────────────────────────────

    #[test]
    fn test_scaled_size_is_identity_at_scale_one() {
        let mon = make_monitor(1920, 1080, 1.0);
        assert_eq!(mon.scaled_width(), 1920);
        assert_eq!(mon.scaled_height(), 1080);
    }

    #[test]
    fn test_scaled_size_halves_at_scale_two() {
        let mon = make_monitor(3840, 2160, 2.0);
        assert_eq!(mon.scaled_width(), 1920);
        assert_eq!(mon.scaled_height(), 1080);
    }

    #[test]
    fn test_scaled_size_rounds_to_nearest() {
        // 1000 / 3 = 333.33… → 333; 1000 / 1.5 = 666.67… → 667
        assert_eq!(make_monitor(1000, 1000, 3.0).scaled_width(), 333);
        assert_eq!(make_monitor(1000, 1000, 1.5).scaled_height(), 667);
    }

    #[test]
    fn test_scaled_size_rounds_ties_away_from_zero() {
        // 25 / 2 = 12.5 → 13
        assert_eq!(make_monitor(25, 25, 2.0).scaled_width(), 13);
    }

    #[test]
    fn test_scaled_size_caps_at_i32_max() {
        // u32 holds widths the signed coordinate space cannot, both straight
        // from the config and after scaling up.
        assert_eq!(make_monitor(u32::MAX, 2160, 1.0).scaled_width(), i32::MAX as u32);
        assert_eq!(make_monitor(1920, u32::MAX, 0.5).scaled_height(), i32::MAX as u32);
    }

    // ── Display ───────────────────────────────────────────────────────────────

    #[test]
    fn test_display_unpositioned_monitor_shows_dimensions_only() {
        let mon = make_monitor(1920, 1080, 1.0);
        assert_eq!(mon.to_string(), "Monitor{1920x1080@1.00x}");
    }

    #[test]
    fn test_display_positioned_monitor_shows_directive_and_alignment() {
        let mon = Monitor {
            width: 1920,
            height: 1080,
            scale: 2.0,
            position: "below A".to_string(),
            align: "center".to_string(),
        };
        assert_eq!(mon.to_string(), "Monitor{1920x1080@2.00x below A align center}");
    }

    // ── Serde defaults ────────────────────────────────────────────────────────

    #[test]
    fn test_deserialize_without_scale_defaults_to_one() {
        let mon: Monitor = toml::from_str("width = 20\nheight = 20").unwrap();
        assert_eq!(mon.scale, 1.0);
        assert_eq!(mon.position, "");
        assert_eq!(mon.align, "");
    }

    #[test]
    fn test_deserialize_full_monitor_table() {
        let mon: Monitor = toml::from_str(
            r#"
width = 2560
height = 1440
scale = 1.5
position = "left-of main"
align = "bottom"
"#,
        )
        .unwrap();
        assert_eq!(mon.width, 2560);
        assert_eq!(mon.scale, 1.5);
        assert_eq!(mon.position, "left-of main");
        assert_eq!(mon.align, "bottom");
    }

    #[test]
    fn test_config_deserializes_monitor_tables_by_name() {
        let config: Config = toml::from_str(
            r#"
[monitors.main]
width = 1920
height = 1080

[monitors.side]
width = 1280
height = 1024
position = "right-of main"
"#,
        )
        .unwrap();
        assert_eq!(config.monitors.len(), 2);
        assert_eq!(config.monitors["side"].position, "right-of main");
    }

    #[test]
    fn test_serialize_omits_empty_position_and_align() {
        let mut config = Config::default();
        config
            .monitors
            .insert("main".to_string(), make_monitor(1920, 1080, 1.0));

        let rendered = toml::to_string(&config).unwrap();
        assert!(!rendered.contains("position"), "empty position must be omitted");
        assert!(!rendered.contains("align"), "empty align must be omitted");

        let restored: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(restored, config);
    }
}
