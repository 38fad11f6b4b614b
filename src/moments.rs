//! Moment triples and the path accumulator.
//!
//! A path is folded element by element into a [`MomentAccumulator`],
//! which tracks the pen position, the start of the active subpath and
//! the running sums of signed area and first moments.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg};

use kurbo::{PathEl, Point};
use log::debug;

use crate::config::{MomentConfig, SubpathMode};
use crate::error::MomentError;
use crate::segment::{
    cubic_area, cubic_lamina, linear_area, linear_lamina, quadratic_area, quadratic_lamina,
};

/// Area and first moments of area of a region.
///
/// `moment_x` is `∫x dA` and `moment_y` is `∫y dA`, so the centroid is
/// `(moment_x / area, moment_y / area)`. Triples of disjoint regions add.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Moments {
    pub area: f64,
    pub moment_x: f64,
    pub moment_y: f64,
}

impl Moments {
    pub const ZERO: Moments = Moments {
        area: 0.0,
        moment_x: 0.0,
        moment_y: 0.0,
    };

    pub fn new(area: f64, moment_x: f64, moment_y: f64) -> Self {
        Self {
            area,
            moment_x,
            moment_y,
        }
    }

    /// Flip the whole triple if the area is negative (clockwise traversal),
    /// so regions of either winding contribute positive mass.
    pub fn normalized(self) -> Self {
        if self.area < 0.0 {
            -self
        } else {
            self
        }
    }

    /// Centre of gravity. Fails when the area is zero or not finite.
    pub fn centroid(&self) -> Result<Point, MomentError> {
        self.centroid_with_tolerance(0.0)
    }

    /// Centre of gravity, treating `|area| <= tolerance` as zero.
    pub fn centroid_with_tolerance(&self, tolerance: f64) -> Result<Point, MomentError> {
        // Also rejects NaN.
        if !(self.area.is_finite() && self.area.abs() > tolerance) {
            return Err(MomentError::UndefinedCentroid { area: self.area });
        }
        Ok(Point::new(
            self.moment_x / self.area,
            self.moment_y / self.area,
        ))
    }

    fn line(p0: Point, p1: Point) -> Self {
        Self {
            area: linear_area(p0.x, p0.y, p1.x, p1.y),
            moment_x: linear_lamina(p0.x, p0.y, p1.x, p1.y),
            moment_y: -linear_lamina(p0.y, p0.x, p1.y, p1.x),
        }
    }

    fn quad(p0: Point, p1: Point, p2: Point) -> Self {
        Self {
            area: quadratic_area(p0.x, p0.y, p1.x, p1.y, p2.x, p2.y),
            moment_x: quadratic_lamina(p0.x, p0.y, p1.x, p1.y, p2.x, p2.y),
            moment_y: -quadratic_lamina(p0.y, p0.x, p1.y, p1.x, p2.y, p2.x),
        }
    }

    fn cubic(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            area: cubic_area(p0.x, p0.y, p1.x, p1.y, p2.x, p2.y, p3.x, p3.y),
            moment_x: cubic_lamina(p0.x, p0.y, p1.x, p1.y, p2.x, p2.y, p3.x, p3.y),
            moment_y: -cubic_lamina(p0.y, p0.x, p1.y, p1.x, p2.y, p2.x, p3.y, p3.x),
        }
    }
}

impl Add for Moments {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            area: self.area + rhs.area,
            moment_x: self.moment_x + rhs.moment_x,
            moment_y: self.moment_y + rhs.moment_y,
        }
    }
}

impl AddAssign for Moments {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Neg for Moments {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            area: -self.area,
            moment_x: -self.moment_x,
            moment_y: -self.moment_y,
        }
    }
}

impl Sum for Moments {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Moments::ZERO, Add::add)
    }
}

/// Fold state for integrating one path.
#[derive(Debug, Clone)]
pub struct MomentAccumulator {
    mode: SubpathMode,
    quadratic: bool,
    close_open: bool,
    /// Pen position; `None` until the first `MoveTo`.
    current: Option<Point>,
    /// Start of the active subpath.
    start: Point,
    drawn: bool,
    closed: bool,
    subpath: Moments,
    total: Moments,
    subpaths: usize,
    elements: usize,
}

impl MomentAccumulator {
    pub fn new(config: &MomentConfig) -> Self {
        Self {
            mode: config.subpaths,
            quadratic: config.quadratic_segments,
            close_open: config.close_open_subpaths,
            current: None,
            start: Point::ZERO,
            drawn: false,
            closed: false,
            subpath: Moments::ZERO,
            total: Moments::ZERO,
            subpaths: 0,
            elements: 0,
        }
    }

    /// Integrate one path element.
    pub fn push(&mut self, el: PathEl) -> Result<(), MomentError> {
        self.elements += 1;
        match el {
            PathEl::MoveTo(p) => {
                self.end_subpath()?;
                self.start = p;
                self.current = Some(p);
            }
            PathEl::LineTo(p1) => {
                let p0 = self.pen()?;
                self.draw(Moments::line(p0, p1), p1);
            }
            PathEl::QuadTo(p1, p2) => {
                if !self.quadratic {
                    return Err(MomentError::UnsupportedSegment("QuadTo"));
                }
                let p0 = self.pen()?;
                self.draw(Moments::quad(p0, p1, p2), p2);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let p0 = self.pen()?;
                self.draw(Moments::cubic(p0, p1, p2, p3), p3);
            }
            PathEl::ClosePath => {
                if self.closed {
                    return Ok(());
                }
                let p0 = self.pen()?;
                let start = self.start;
                self.draw(Moments::line(p0, start), start);
                self.closed = true;
            }
        }
        Ok(())
    }

    /// Close the last subpath and return the signed (un-normalized) sums.
    pub fn finish(mut self) -> Result<Moments, MomentError> {
        if self.elements == 0 {
            return Err(MomentError::EmptyPath);
        }
        self.end_subpath()?;
        Ok(self.total)
    }

    /// Current point for the next drawing segment. Drawing on after a
    /// `ClosePath` starts a new subpath at the previous start point.
    fn pen(&mut self) -> Result<Point, MomentError> {
        let current = self.current.ok_or(MomentError::MissingMoveTo)?;
        if self.closed {
            self.end_subpath()?;
        }
        Ok(current)
    }

    fn draw(&mut self, contribution: Moments, end: Point) {
        self.subpath += contribution;
        self.current = Some(end);
        self.drawn = true;
    }

    fn end_subpath(&mut self) -> Result<(), MomentError> {
        if !self.drawn {
            return Ok(());
        }
        if !self.closed && self.close_open {
            if let Some(p0) = self.current {
                self.subpath += Moments::line(p0, self.start);
            }
        }
        let subpath = std::mem::take(&mut self.subpath);
        self.subpaths += 1;
        self.drawn = false;
        self.closed = false;
        debug!(
            "subpath {}: signed area {:.6}, moments ({:.6}, {:.6})",
            self.subpaths, subpath.area, subpath.moment_x, subpath.moment_y,
        );
        match self.mode {
            SubpathMode::Single if self.subpaths > 1 => return Err(MomentError::MultipleSubpaths),
            SubpathMode::Single | SubpathMode::Winding => self.total += subpath,
            SubpathMode::Independent => self.total += subpath.normalized(),
        }
        Ok(())
    }
}

/// Signed area and first moments of a path, before winding normalization.
///
/// Counter-clockwise paths (y-up) give a positive area, clockwise paths
/// a negative one.
pub fn signed_moments(elements: &[PathEl], config: &MomentConfig) -> Result<Moments, MomentError> {
    elements
        .iter()
        .try_fold(MomentAccumulator::new(config), |mut acc, el| {
            acc.push(*el)?;
            Ok::<_, MomentError>(acc)
        })?
        .finish()
}

/// Area and first moments of a path, normalized to positive area.
pub fn compute_moments(elements: &[PathEl], config: &MomentConfig) -> Result<Moments, MomentError> {
    let moments = signed_moments(elements, config)?.normalized();
    debug!(
        "path of {} elements: area {:.6}, moments ({:.6}, {:.6})",
        elements.len(),
        moments.area,
        moments.moment_x,
        moments.moment_y,
    );
    Ok(moments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::BezPath;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<PathEl> {
        vec![
            PathEl::MoveTo(Point::new(x0, y0)),
            PathEl::LineTo(Point::new(x1, y0)),
            PathEl::LineTo(Point::new(x1, y1)),
            PathEl::LineTo(Point::new(x0, y1)),
            PathEl::ClosePath,
        ]
    }

    fn reversed_rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<PathEl> {
        vec![
            PathEl::MoveTo(Point::new(x0, y0)),
            PathEl::LineTo(Point::new(x0, y1)),
            PathEl::LineTo(Point::new(x1, y1)),
            PathEl::LineTo(Point::new(x1, y0)),
            PathEl::ClosePath,
        ]
    }

    fn assert_near(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {}, got {}", b, a);
    }

    #[test]
    fn unit_square() {
        let m = compute_moments(&rect(0.0, 0.0, 1.0, 1.0), &MomentConfig::default()).unwrap();
        assert_near(m.area, 1.0);
        let c = m.centroid().unwrap();
        assert_near(c.x, 0.5);
        assert_near(c.y, 0.5);
    }

    #[test]
    fn clockwise_square_is_negated_then_normalized() {
        let config = MomentConfig::default();
        let raw = signed_moments(&reversed_rect(0.0, 0.0, 2.0, 1.0), &config).unwrap();
        assert_near(raw.area, -2.0);
        let m = compute_moments(&reversed_rect(0.0, 0.0, 2.0, 1.0), &config).unwrap();
        let ccw = compute_moments(&rect(0.0, 0.0, 2.0, 1.0), &config).unwrap();
        assert_near(m.area, ccw.area);
        assert_near(m.moment_x, ccw.moment_x);
        assert_near(m.moment_y, ccw.moment_y);
    }

    #[test]
    fn empty_path_is_an_error() {
        let result = compute_moments(&[], &MomentConfig::default());
        assert!(matches!(result, Err(MomentError::EmptyPath)));
    }

    #[test]
    fn single_move_has_zero_area_and_no_centroid() {
        let path = [PathEl::MoveTo(Point::new(3.0, 4.0))];
        let m = compute_moments(&path, &MomentConfig::default()).unwrap();
        assert_eq!(m, Moments::ZERO);
        assert!(matches!(m.centroid(), Err(MomentError::UndefinedCentroid { .. })));
    }

    #[test]
    fn segment_before_move_is_an_error() {
        let path = [PathEl::LineTo(Point::new(1.0, 0.0)), PathEl::ClosePath];
        let result = compute_moments(&path, &MomentConfig::default());
        assert!(matches!(result, Err(MomentError::MissingMoveTo)));
    }

    #[test]
    fn quadratic_rejected_unless_enabled() {
        let path = [
            PathEl::MoveTo(Point::new(0.0, 0.0)),
            PathEl::QuadTo(Point::new(1.0, 2.0), Point::new(2.0, 0.0)),
            PathEl::ClosePath,
        ];
        let result = compute_moments(&path, &MomentConfig::default());
        assert!(matches!(result, Err(MomentError::UnsupportedSegment("QuadTo"))));

        let config = MomentConfig {
            quadratic_segments: true,
            ..MomentConfig::default()
        };
        // Parabolic segment over a chord of 2 with apex height 1: area 4/3.
        let m = compute_moments(&path, &config).unwrap();
        assert_near(m.area, 4.0 / 3.0);
        let c = m.centroid().unwrap();
        assert_near(c.x, 1.0);
        assert_near(c.y, 0.4);
    }

    #[test]
    fn open_path_is_closed_implicitly() {
        let config = MomentConfig::default();
        let mut open = rect(1.0, 1.0, 3.0, 2.0);
        open.pop();
        let closed = compute_moments(&rect(1.0, 1.0, 3.0, 2.0), &config).unwrap();
        assert_eq!(compute_moments(&open, &config).unwrap(), closed);

        let no_close = MomentConfig {
            close_open_subpaths: false,
            ..MomentConfig::default()
        };
        let partial = compute_moments(&open, &no_close).unwrap();
        assert_ne!(partial, closed);
    }

    #[test]
    fn repeated_close_is_ignored() {
        let config = MomentConfig::default();
        let mut path = rect(0.0, 0.0, 1.0, 1.0);
        path.push(PathEl::ClosePath);
        assert_near(compute_moments(&path, &config).unwrap().area, 1.0);
    }

    #[test]
    fn leading_moves_only_relocate() {
        let mut path = vec![PathEl::MoveTo(Point::new(50.0, 50.0))];
        path.extend(rect(0.0, 0.0, 1.0, 1.0));
        let m = compute_moments(&path, &MomentConfig::default()).unwrap();
        assert_near(m.area, 1.0);
    }

    #[test]
    fn second_subpath_rejected_in_single_mode() {
        let mut path = rect(0.0, 0.0, 1.0, 1.0);
        path.extend(rect(5.0, 0.0, 6.0, 1.0));
        let result = compute_moments(&path, &MomentConfig::default());
        assert!(matches!(result, Err(MomentError::MultipleSubpaths)));
    }

    #[test]
    fn drawing_after_close_starts_new_subpath() {
        let mut path = rect(0.0, 0.0, 1.0, 1.0);
        path.push(PathEl::LineTo(Point::new(-1.0, 0.0)));
        path.push(PathEl::LineTo(Point::new(-1.0, -1.0)));
        let result = compute_moments(&path, &MomentConfig::default());
        assert!(matches!(result, Err(MomentError::MultipleSubpaths)));
    }

    #[test]
    fn hole_subtracts_only_in_winding_mode() {
        let mut path = rect(0.0, 0.0, 4.0, 4.0);
        path.extend(reversed_rect(1.0, 1.0, 3.0, 3.0));

        let winding = MomentConfig {
            subpaths: SubpathMode::Winding,
            ..MomentConfig::default()
        };
        let m = compute_moments(&path, &winding).unwrap();
        assert_near(m.area, 12.0);
        let c = m.centroid().unwrap();
        assert_near(c.x, 2.0);
        assert_near(c.y, 2.0);

        let independent = MomentConfig {
            subpaths: SubpathMode::Independent,
            ..MomentConfig::default()
        };
        let m = compute_moments(&path, &independent).unwrap();
        assert_near(m.area, 20.0);
    }

    #[test]
    fn independent_subpaths_add_mass() {
        let mut path = rect(0.0, 0.0, 1.0, 1.0);
        path.extend(reversed_rect(10.0, 0.0, 11.0, 1.0));
        let config = MomentConfig {
            subpaths: SubpathMode::Independent,
            ..MomentConfig::default()
        };
        let c = compute_moments(&path, &config).unwrap().centroid().unwrap();
        assert_near(c.x, 5.5);
        assert_near(c.y, 0.5);
    }

    #[test]
    fn accepts_bezpath_elements() {
        let path = BezPath::from_svg("M0 0 L4 0 L0 3 Z").unwrap();
        let m = compute_moments(path.elements(), &MomentConfig::default()).unwrap();
        assert_near(m.area, 6.0);
    }

    #[test]
    fn centroid_rejects_nan_and_tolerance() {
        let nan = Moments::new(f64::NAN, 1.0, 1.0);
        assert!(nan.centroid().is_err());
        let tiny = Moments::new(1e-12, 1.0, 1.0);
        assert!(tiny.centroid().is_ok());
        assert!(tiny.centroid_with_tolerance(1e-9).is_err());
    }
}
