/// 2D arc math utilities.
///
/// Angles follow the canvas convention: measured from +x toward +y, with
/// `y` pointing down on the raster. Drawing angles are whole degrees.
use std::f64::consts::{PI, TAU};

use super::Point2;

/// Evaluates a point on the ellipse inscribed in a bounding box centered at
/// `center` with semi-axes `rx`, `ry`.
#[must_use]
pub fn ellipse_point_at(center: &Point2, rx: f64, ry: f64, angle: f64) -> Point2 {
    Point2::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
}

/// Evaluates a point on a circle at `angle` (radians).
#[must_use]
pub fn circle_point_at(center: &Point2, radius: f64, angle: f64) -> Point2 {
    ellipse_point_at(center, radius, radius, angle)
}

/// Returns the angle of `point` as seen from `center`, in radians.
#[must_use]
pub fn angle_from_center(center: &Point2, point: &Point2) -> f64 {
    (point.y - center.y).atan2(point.x - center.x)
}

/// Converts radians to whole degrees, rounding half to even.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_degrees(angle_rad: f64) -> i64 {
    angle_rad.to_degrees().round_ties_even() as i64
}

/// Whole-degree span covered by an arc of `length` on a circle of `radius`.
///
/// The span is floored, so an arc is drawn at most as long as its true
/// length at degree granularity. `radius` must be non-zero; the caller
/// rejects zero radii before reaching here.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn span_degrees(length: f64, radius: f64) -> i64 {
    ((180.0 * length) / (PI * radius)).floor() as i64
}

/// Bounding box `[x0, y0, x1, y1]` of a circle.
#[must_use]
pub fn circle_bounding_box(center: &Point2, radius: f64) -> [f64; 4] {
    [
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    ]
}

/// Resolves a pair of whole-degree drawing angles into `(start_rad, sweep_rad)`.
///
/// The arc runs from `start_deg` toward increasing angles. Spans of 360° or
/// more collapse to a full turn; negative spans wrap modulo 360°.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn drawing_sweep(start_deg: i64, end_deg: i64) -> (f64, f64) {
    let start = (start_deg as f64).to_radians();
    let span = end_deg - start_deg;
    if span >= 360 {
        return (start, TAU);
    }
    let span = span.rem_euclid(360);
    (start, (span as f64).to_radians())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn start_point_left_of_center_is_180_degrees() {
        let center = Point2::new(1500.0, 1500.0);
        let start = Point2::new(1490.0, 1500.0);
        let angle = angle_from_center(&center, &start);
        assert!((angle - PI).abs() < TOL, "angle={angle}");
        assert_eq!(round_degrees(angle), 180);
    }

    #[test]
    fn round_degrees_ties_to_even() {
        assert_eq!(round_degrees(2.5_f64.to_radians()), 2);
        assert_eq!(round_degrees(3.5_f64.to_radians()), 4);
        assert_eq!(round_degrees((-90.4_f64).to_radians()), -90);
    }

    #[test]
    fn span_is_floored() {
        // 180 * 500 / (pi * 10) = 2864.79
        assert_eq!(span_degrees(500.0, 10.0), 2864);
        // Exactly a half turn.
        assert_eq!(span_degrees(PI * 10.0, 10.0), 180);
        assert_eq!(span_degrees(0.0, 10.0), 0);
    }

    #[test]
    fn bounding_box_of_circle() {
        let bbox = circle_bounding_box(&Point2::new(10.0, 20.0), 5.0);
        assert_eq!(bbox, [5.0, 15.0, 15.0, 25.0]);
    }

    #[test]
    fn circle_point_quarter_turn() {
        let p = circle_point_at(&Point2::new(1.0, 1.0), 2.0, PI / 2.0);
        assert!((p.x - 1.0).abs() < TOL);
        assert!((p.y - 3.0).abs() < TOL);
    }

    #[test]
    fn sweep_over_full_turn_collapses() {
        let (start, sweep) = drawing_sweep(180, 3044);
        assert!((start - PI).abs() < TOL);
        assert!((sweep - TAU).abs() < TOL);
    }

    #[test]
    fn negative_sweep_wraps() {
        let (_, sweep) = drawing_sweep(90, 0);
        assert!((sweep - 270_f64.to_radians()).abs() < TOL);

        let (_, sweep) = drawing_sweep(-2684, 180);
        assert!((sweep - TAU).abs() < TOL);
    }

    #[test]
    fn empty_sweep() {
        let (_, sweep) = drawing_sweep(45, 45);
        assert!(sweep.abs() < TOL);
    }
}
