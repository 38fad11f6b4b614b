//! bezcog: area and centre of gravity of closed bezier paths.
//!
//! Integrates closed paths made of lines and cubic beziers in closed
//! form, and combines several paths into one centroid as if each were
//! a flat sheet of uniform density.
//!
//! # Example
//!
//! ```
//! use bezcog::{compute_moments, kurbo::BezPath, MomentConfig};
//!
//! let path = BezPath::from_svg("M0 0 L4 0 L0 3 Z").unwrap();
//! let moments = compute_moments(path.elements(), &MomentConfig::default())?;
//! let centroid = moments.centroid()?;
//! assert_eq!(moments.area, 6.0);
//! assert!((centroid.x - 4.0 / 3.0).abs() < 1e-12);
//! # Ok::<(), bezcog::MomentError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod moments;

pub mod aggregate;
pub mod error;
pub mod marker;
pub mod segment;

// Re-export kurbo so downstream users build paths with the same version.
pub use kurbo;

pub use aggregate::{aggregate, measure_batch, BatchReport};
pub use config::{MomentConfig, SubpathMode};
pub use error::MomentError;
pub use moments::{compute_moments, signed_moments, MomentAccumulator, Moments};
