//! Rendering a computed layout plan for terminal output.

use screenplan_core::LayoutPlan;

/// Renders one line per monitor in placement order:
///
/// ```text
/// main: (0,0) 2560x1440
/// side: (2560,0) 1920x1080
/// ```
///
/// Placement order puts the root first and dependents after the monitors
/// they reference, which reads naturally as "start here, then attach these".
pub fn render_plan(plan: &LayoutPlan) -> String {
    let mut out = String::new();

    for name in &plan.order {
        if let Some(rect) = plan.placements.get(name) {
            out.push_str(&format!("{name}: {rect}\n"));
        }
    }

    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
