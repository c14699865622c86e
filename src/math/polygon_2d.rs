use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise in a y-up frame, which reads as clockwise
/// on the y-down canvas.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Drops the trailing point of an explicitly closed ring.
///
/// A ring is explicitly closed when it has more than one point and its first
/// and last points are exactly equal. Fill routines close rings implicitly.
pub fn drop_closing_duplicate(points: &mut Vec<Point2>) {
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
}

/// Removes consecutive points closer than [`TOLERANCE`], including the
/// wrap-around pair when `closed` is set.
#[must_use]
pub fn dedup_consecutive(points: &[Point2], closed: bool) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if out.last().is_none_or(|last| (p - last).norm() >= TOLERANCE) {
            out.push(*p);
        }
    }
    if closed && out.len() > 1 {
        if let (Some(first), Some(last)) = (out.first(), out.last()) {
            if (first - last).norm() < TOLERANCE {
                out.pop();
            }
        }
    }
    out
}
