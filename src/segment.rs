//! Closed-form area and first-moment contributions of single segments.
//!
//! Each formula is the Green's theorem line integral of the segment,
//! integrated symbolically over the Bezier parametrization and taken
//! relative to the origin. Summing the contributions of a closed path
//! gives its signed area and first moments exactly (up to rounding).
//!
//! The lamina functions integrate `u^2 dv / 2` along the segment. Called
//! with `(x, y)` ordering they give `∫x dA`; called with `(y, x)` ordering
//! and negated they give `∫y dA`.

/// Signed area of the triangle swept from the origin by a line segment.
pub fn linear_area(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    0.5 * (x0 * y1 - y0 * x1)
}

/// First-moment contribution of a line segment.
pub fn linear_lamina(u0: f64, v0: f64, u1: f64, v1: f64) -> f64 {
    (u0 * u0 + u0 * u1 + u1 * u1) * (v1 - v0) / 6.0
}

/// Signed area contribution of a quadratic Bezier segment.
pub fn quadratic_area(x0: f64, y0: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (-2.0 * x1 * y0 - x2 * y0 + 2.0 * x0 * y1 - 2.0 * x2 * y1 + x0 * y2 + 2.0 * x1 * y2) / 6.0
}

/// First-moment contribution of a quadratic Bezier segment.
pub fn quadratic_lamina(u0: f64, v0: f64, u1: f64, v1: f64, u2: f64, v2: f64) -> f64 {
    (u0 * u0 * (-5.0 * v0 + 4.0 * v1 + v2)
        + u0 * (u2 * (v2 - v0) + 2.0 * u1 * (-2.0 * v0 + v1 + v2))
        - 2.0 * u1 * u1 * (v0 - v2)
        - 2.0 * u1 * u2 * (v0 + v1 - 2.0 * v2)
        - u2 * u2 * (v0 + 4.0 * v1 - 5.0 * v2))
        / 30.0
}

/// Signed area contribution of a cubic Bezier segment.
#[allow(clippy::too_many_arguments)]
pub fn cubic_area(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
) -> f64 {
    (-6.0 * x1 * y0 - 3.0 * x2 * y0 - x3 * y0
        + 6.0 * x0 * y1 - 3.0 * x2 * y1 - 3.0 * x3 * y1
        + 3.0 * x0 * y2 + 3.0 * x1 * y2 - 6.0 * x3 * y2
        + x0 * y3 + 3.0 * x1 * y3 + 6.0 * x2 * y3)
        / 20.0
}

/// First-moment contribution of a cubic Bezier segment.
#[allow(clippy::too_many_arguments)]
pub fn cubic_lamina(
    u0: f64,
    v0: f64,
    u1: f64,
    v1: f64,
    u2: f64,
    v2: f64,
    u3: f64,
    v3: f64,
) -> f64 {
    let start = 5.0 * u0 * u0 * (-28.0 * v0 + 21.0 * v1 + 6.0 * v2 + v3)
        + u0 * (15.0 * u1 * (-7.0 * v0 + 3.0 * (v1 + v2) + v3)
            + 6.0 * u2 * (-5.0 * v0 + 3.0 * v2 + 2.0 * v3)
            + u3 * (-5.0 * v0 - 3.0 * v1 + 3.0 * v2 + 5.0 * v3));
    let tail = -18.0 * u2 * u2 * v0 - 5.0 * u3 * u3 * v0 - 15.0 * u2 * u3 * v0
        - 27.0 * u2 * u2 * v1 - 30.0 * u3 * u3 * v1 - 45.0 * u2 * u3 * v1
        - 105.0 * u3 * u3 * v2 - 45.0 * u2 * u3 * v2
        + 5.0 * (9.0 * u2 * u2 + 21.0 * u3 * u2 + 28.0 * u3 * u3) * v3;
    let inner = 9.0 * u1 * u1 * (-5.0 * v0 + 3.0 * v2 + 2.0 * v3)
        - 3.0 * u1
            * (2.0 * u3 * (2.0 * v0 + 3.0 * v1 - 5.0 * v3)
                + 3.0 * u2 * (5.0 * v0 + 3.0 * v1 - 3.0 * v2 - 5.0 * v3));
    (start + tail + inner) / 840.0
}
