use thiserror::Error;

/// Errors that can occur while measuring a path.
///
/// Every variant is terminal for the path it was raised on; batch
/// measurement keeps going for sibling paths.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MomentError {
    #[error("path has no segments")]
    EmptyPath,

    #[error("unsupported segment: {0}")]
    UnsupportedSegment(&'static str),

    #[error("centroid is undefined for area {area}")]
    UndefinedCentroid { area: f64 },

    #[error("segment before the first MoveTo")]
    MissingMoveTo,

    #[error("path has more than one subpath")]
    MultipleSubpaths,

    #[error("no paths to aggregate")]
    EmptyBatch,

    #[error("invalid path: {0}")]
    InvalidPath(String),
}
