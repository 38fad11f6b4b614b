/// All measuring parameters in one struct.
/// Adjustable at runtime; the CLI maps its flags onto it.
#[derive(Debug, Clone)]
pub struct MomentConfig {
    /// How paths with more than one subpath are treated.
    pub subpaths: SubpathMode,
    /// Route `QuadTo` through the quadratic formulas.
    /// When false, a quadratic segment is rejected.
    pub quadratic_segments: bool,
    /// Close subpaths that do not end in `ClosePath` with a straight
    /// segment back to their start point.
    pub close_open_subpaths: bool,
    /// The centroid is undefined when `|area|` is at or below this value.
    /// 0 = only an exactly zero area is rejected.
    pub area_tolerance: f64,
}

/// Treatment of paths containing several subpaths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubpathMode {
    /// Exactly one subpath per path; a second one is an error.
    #[default]
    Single,
    /// Each subpath is normalized to positive area on its own and the
    /// results are summed. Every subpath adds mass.
    Independent,
    /// Signed subpath sums are combined before normalizing, so a subpath
    /// wound against the outer one is subtracted (a hole).
    Winding,
}

impl Default for MomentConfig {
    fn default() -> Self {
        Self {
            subpaths: SubpathMode::Single,
            quadratic_segments: false,
            close_open_subpaths: true,
            area_tolerance: 0.0,
        }
    }
}
