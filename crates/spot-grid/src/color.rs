//! Deterministic person colors.
//!
//! The hue of the `i`-th placed person is `i * GOLDEN_ANGLE + 60` (mod 360).
//! Successive golden-angle steps never land close to an earlier hue, so no
//! palette or history of prior colors is needed.

/// `180 * (3 - sqrt(5))` degrees.
pub const GOLDEN_ANGLE_DEG: f64 = 137.507_764_050_037_85;

/// Hue of placement index 0.
pub const HUE_OFFSET_DEG: f64 = 60.0;

/// Hue in `[0, 360)` for the person placed at `order`.
pub fn hue_for(order: usize) -> f64 {
    (order as f64 * GOLDEN_ANGLE_DEG + HUE_OFFSET_DEG).rem_euclid(360.0)
}

/// `hsl(<hue>, 100%, 60%)` for the person placed at `order`.
pub fn placement_color(order: usize) -> String {
    format!("hsl({:.2}, 100%, 60%)", hue_for(order))
}
