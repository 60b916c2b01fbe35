use glam::DVec2;

use super::site::Site;

/// Bearing of the directed segment from `from` to `to`, in signed degrees.
///
/// The angle is `atan2(dy, dx)` converted to degrees and is NOT normalized
/// to [0, 360): values lie in (-180, 180]. Returns `None` for a zero-length
/// segment, which has no direction.
pub fn bearing(from: Site, to: Site) -> Option<f64> {
    let dir = DVec2::new(to.x - from.x, to.y - from.y);
    if dir.length_squared() == 0.0 {
        return None;
    }
    Some(dir.y.atan2(dir.x).to_degrees())
}

/// Absolute difference of two raw signed bearings.
///
/// Because the operands are not normalized, a pair of directions straddling
/// the ±180° boundary reports an inflated deviation (e.g. 179° vs -179°
/// yields 358°, not 2°). Callers compare the result against a threshold in
/// degrees and thereby treat such pairs as misaligned.
pub fn deviation(a: f64, b: f64) -> f64 {
    (a - b).abs()
}
