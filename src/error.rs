use std::error::Error;
use std::fmt;

/// Errors reported while validating stitching inputs.
///
/// All variants are detected before the first round runs; the whole run
/// aborts with no partial result. The stitching computation itself is
/// deterministic, so retrying without fixing the input has no effect.
#[derive(Clone, Debug, PartialEq)]
pub enum StitchError {
    /// A line feature has fewer than two coordinates, so its start and end
    /// points are undefined.
    DegenerateGeometry {
        /// Id of the offending line.
        line: String,
    },
    /// Two line features carry the same id.
    DuplicateLineId {
        /// The repeated id.
        line: String,
    },
    /// The angle threshold is not a finite positive number of degrees.
    InvalidAngleThreshold {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGeometry { line } => {
                write!(f, "line '{line}' has fewer than two coordinates")
            }
            Self::DuplicateLineId { line } => {
                write!(f, "line id '{line}' appears more than once")
            }
            Self::InvalidAngleThreshold { value } => {
                write!(f, "angle threshold must be a finite positive number of degrees, got {value}")
            }
        }
    }
}

impl Error for StitchError {}
