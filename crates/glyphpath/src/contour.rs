//! Quadratic TrueType contours to path commands.

use crate::{outline::OutlinePoint, path::Point, path::TextPath, units::point_to_device};

/// Traces one closed contour onto `path`, translated by `(dx, dy)`.
///
/// Two off-curve points in a row imply an on-curve point halfway between
/// them. The contour is closed back to its first point with a line or, when
/// the last point is off-curve, a curve using it as control. An empty
/// contour appends nothing.
pub fn append_contour(path: &mut TextPath, points: &[OutlinePoint], dx: f64, dy: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    // implied midpoints are taken at the origin, the offset is added last
    let at = |p: Point| Point::new(p.x + dx, p.y + dy);
    let start = point_to_device(*first, 0.0, 0.0);
    path.move_to(at(start));

    // the first point is placed by the move, so it counts as on-curve
    let (mut prev, mut prev_on) = (start, true);
    for p in rest {
        let cur = point_to_device(*p, 0.0, 0.0);
        match (prev_on, p.on_curve) {
            (true, true) => path.line_to(at(cur)),
            (false, true) => path.quad_curve_to(at(cur), at(prev)),
            (true, false) => {}
            (false, false) => path.quad_curve_to(at(prev.midpoint(cur)), at(prev)),
        }
        prev = cur;
        prev_on = p.on_curve;
    }

    if prev_on {
        path.line_to(at(start));
    } else {
        path.quad_curve_to(at(start), at(prev));
    }
}
