//! Marker geometry for showing a centroid on canvas.
//!
//! Only the outlines are produced here; styling and insertion into a
//! document belong to the caller.

use kurbo::{BezPath, Point};

/// Two open strokes crossing at `center`, each `2 * radius` long.
pub fn crosshair(center: Point, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((center.x, center.y - radius));
    path.line_to((center.x, center.y + radius));
    path.move_to((center.x - radius, center.y));
    path.line_to((center.x + radius, center.y));
    path
}

/// Closed diamond around `center` with half-diagonal `radius / 2`.
pub fn diamond(center: Point, radius: f64) -> BezPath {
    let r = radius / 2.0;
    let mut path = BezPath::new();
    path.move_to((center.x - r, center.y));
    path.line_to((center.x, center.y - r));
    path.line_to((center.x + r, center.y));
    path.line_to((center.x, center.y + r));
    path.close_path();
    path
}
