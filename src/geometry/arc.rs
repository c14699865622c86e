use crate::math::Point2;

/// One trajectory segment in physical units, as supplied by the caller.
///
/// The sign of `signed_radius` encodes the turn direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySegment {
    pub length: f64,
    pub signed_radius: f64,
}

impl TrajectorySegment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(length: f64, signed_radius: f64) -> Self {
        Self {
            length,
            signed_radius,
        }
    }
}

impl From<(f64, f64)> for TrajectorySegment {
    fn from((length, signed_radius): (f64, f64)) -> Self {
        Self::new(length, signed_radius)
    }
}

/// A trajectory segment normalized into canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    length: f64,
    signed_radius: f64,
}

impl Arc {
    /// Scales a physical segment into canvas units.
    #[must_use]
    pub fn from_segment(segment: TrajectorySegment, scale: f64) -> Self {
        Self {
            length: segment.length * scale,
            signed_radius: segment.signed_radius * scale,
        }
    }

    /// Arc length in canvas units.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Signed radius in canvas units.
    #[must_use]
    pub fn signed_radius(&self) -> f64 {
        self.signed_radius
    }

    /// Unsigned radius in canvas units.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.signed_radius.abs()
    }

    /// Whether the radius was given as negative.
    #[must_use]
    pub fn is_negative_turn(&self) -> bool {
        self.signed_radius < 0.0
    }
}

/// Fully resolved geometry of one arc in a chain.
///
/// `continuity_angle` is the unrounded start angle measured from the circle
/// center and drives the ending point. The draw angles are whole degrees and,
/// for negative turns, are swapped so the span runs backwards from the start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedArc {
    pub circle_center: Point2,
    pub starting_point: Point2,
    pub ending_point: Point2,
    pub draw_start_deg: i64,
    pub draw_end_deg: i64,
    pub continuity_angle: f64,
    pub radius: f64,
    pub length: f64,
    pub is_negative_turn: bool,
}

impl ResolvedArc {
    /// Bounding box `[x0, y0, x1, y1]` of this arc's circle.
    #[must_use]
    pub fn bounding_box(&self) -> [f64; 4] {
        crate::math::arc_2d::circle_bounding_box(&self.circle_center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_and_turn_flag() {
        let arc = Arc::from_segment(TrajectorySegment::new(0.5, -0.01), 1000.0);
        assert!((arc.length() - 500.0).abs() < 1e-9);
        assert!((arc.radius() - 10.0).abs() < 1e-9);
        assert!((arc.signed_radius() + 10.0).abs() < 1e-9);
        assert!(arc.is_negative_turn());
    }

    #[test]
    fn zero_radius_is_a_positive_turn() {
        let arc = Arc::from_segment((1.0, 0.0).into(), 1000.0);
        assert!(!arc.is_negative_turn());
        assert!(arc.radius().abs() < f64::EPSILON);
    }
}
