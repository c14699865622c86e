//! Path construction for the shapes the canvas draws.
//!
//! Arcs are emitted as cubic Bézier segments of at most a quarter turn each,
//! using the `4/3 · tan(θ/4)` handle length.

use std::f64::consts::{FRAC_PI_2, TAU};

use tiny_skia::{Path, PathBuilder};

use crate::math::arc_2d::{drawing_sweep, ellipse_point_at};
use crate::math::{Point2, Vector2};

/// A whole-degree arc of the ellipse inscribed in a bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseArc {
    center: Point2,
    rx: f64,
    ry: f64,
    start: f64,
    sweep: f64,
}

impl EllipseArc {
    /// Creates the arc of the ellipse inscribed in `bbox` (`[x0, y0, x1, y1]`)
    /// running from `start_deg` toward increasing angles up to `end_deg`.
    #[must_use]
    pub fn in_box(bbox: [f64; 4], start_deg: i64, end_deg: i64) -> Self {
        let [x0, y0, x1, y1] = bbox;
        let (start, sweep) = drawing_sweep(start_deg, end_deg);
        Self {
            center: Point2::new(f64::midpoint(x0, x1), f64::midpoint(y0, y1)),
            rx: (x1 - x0).abs() * 0.5,
            ry: (y1 - y0).abs() * 0.5,
            start,
            sweep,
        }
    }

    /// Shrinks both semi-axes by `by`.
    #[must_use]
    pub fn inset(self, by: f64) -> Self {
        Self {
            rx: self.rx - by,
            ry: self.ry - by,
            ..self
        }
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[must_use]
    pub fn semi_axes(&self) -> (f64, f64) {
        (self.rx, self.ry)
    }

    /// Whether the arc covers a full turn.
    #[must_use]
    pub fn is_full(&self) -> bool {
        (self.sweep - TAU).abs() < f64::EPSILON
    }

    /// Whether the arc covers no angle at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sweep <= 0.0
    }

    /// The arc as an open path, or a closed one for a full turn.
    ///
    /// `None` when the arc is empty or the geometry is not finite.
    #[must_use]
    pub fn to_path(&self) -> Option<Path> {
        if self.is_empty() {
            return None;
        }
        let mut pb = PathBuilder::new();
        let first = self.point_at(self.start);
        pb.move_to(to_f32(first.x), to_f32(first.y));
        self.push_segments(&mut pb);
        if self.is_full() {
            pb.close();
        }
        pb.finish()
    }

    /// The pie sector bounded by the arc and the two radii to its ends.
    ///
    /// A full turn gives the whole ellipse.
    #[must_use]
    pub fn to_sector(&self) -> Option<Path> {
        if self.is_empty() {
            return None;
        }
        let mut pb = PathBuilder::new();
        if self.is_full() {
            let first = self.point_at(self.start);
            pb.move_to(to_f32(first.x), to_f32(first.y));
        } else {
            pb.move_to(to_f32(self.center.x), to_f32(self.center.y));
            let first = self.point_at(self.start);
            pb.line_to(to_f32(first.x), to_f32(first.y));
        }
        self.push_segments(&mut pb);
        pb.close();
        pb.finish()
    }

    fn point_at(&self, angle: f64) -> Point2 {
        ellipse_point_at(&self.center, self.rx, self.ry, angle)
    }

    fn tangent_at(&self, angle: f64) -> Vector2 {
        Vector2::new(-self.rx * angle.sin(), self.ry * angle.cos())
    }

    /// Appends cubic segments from the arc start to its end; the current
    /// point must already be the arc start.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn push_segments(&self, pb: &mut PathBuilder) {
        let count = (self.sweep / FRAC_PI_2).ceil().max(1.0) as usize;
        let step = self.sweep / count as f64;
        let kappa = 4.0 / 3.0 * (step / 4.0).tan();

        for i in 0..count {
            let a0 = self.start + step * i as f64;
            let a1 = a0 + step;
            let c1 = self.point_at(a0) + self.tangent_at(a0) * kappa;
            let end = self.point_at(a1);
            let c2 = end - self.tangent_at(a1) * kappa;
            pb.cubic_to(
                to_f32(c1.x),
                to_f32(c1.y),
                to_f32(c2.x),
                to_f32(c2.y),
                to_f32(end.x),
                to_f32(end.y),
            );
        }
    }
}

/// A polyline through `points`, closed back to the first point when `closed`.
///
/// `None` for fewer than two points.
#[must_use]
pub fn polyline_path(points: &[Point2], closed: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(to_f32(first.x), to_f32(first.y));
    for p in rest {
        pb.line_to(to_f32(p.x), to_f32(p.y));
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn to_f32(v: f64) -> f32 {
    v as f32
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn box_gives_center_and_axes() {
        let arc = EllipseArc::in_box([10.0, 20.0, 30.0, 60.0], 0, 90);
        assert_eq!(arc.center(), Point2::new(20.0, 40.0));
        assert_eq!(arc.semi_axes(), (10.0, 20.0));
        assert_eq!(arc.inset(3.0).semi_axes(), (7.0, 17.0));
    }

    #[test]
    fn quarter_arc_bounds() {
        // 0..90 runs from (+r, 0) to (0, +r) around the center.
        let path = EllipseArc::in_box([0.0, 0.0, 20.0, 20.0], 0, 90)
            .to_path()
            .unwrap();
        let bounds = path.bounds();
        assert!((bounds.left() - 10.0).abs() < 1e-3);
        assert!((bounds.top() - 10.0).abs() < 1e-3);
        assert!((bounds.right() - 20.0).abs() < 1e-3);
        assert!((bounds.bottom() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn long_span_is_full_turn() {
        let arc = EllipseArc::in_box([1490.0, 1490.0, 1510.0, 1510.0], 180, 3044);
        assert!(arc.is_full());
        let bounds = arc.to_path().unwrap().bounds();
        assert!((bounds.width() - 20.0).abs() < 1e-2);
        assert!((bounds.height() - 20.0).abs() < 1e-2);
    }

    #[test]
    fn empty_sweep_has_no_path() {
        let arc = EllipseArc::in_box([0.0, 0.0, 10.0, 10.0], 30, 30);
        assert!(arc.is_empty());
        assert!(arc.to_path().is_none());
        assert!(arc.to_sector().is_none());
    }

    #[test]
    fn sector_includes_center() {
        let path = EllipseArc::in_box([0.0, 0.0, 20.0, 20.0], 0, 90)
            .to_sector()
            .unwrap();
        let bounds = path.bounds();
        assert!((bounds.left() - 10.0).abs() < 1e-3);
        assert!((bounds.top() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn polyline_needs_two_points() {
        assert!(polyline_path(&[], true).is_none());
        assert!(polyline_path(&[Point2::new(1.0, 1.0)], true).is_none());
        let path = polyline_path(&[Point2::new(1.0, 1.0), Point2::new(5.0, 1.0)], false).unwrap();
        assert_eq!(path.points().len(), 2);
    }
}
