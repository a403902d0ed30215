//! The error type for all fallible operations on point views and their layouts

use thiserror::Error;

use crate::containers::PointId;
use crate::layout::{DimTypeId, DimensionId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointViewError {
    #[error("Dimension {0} is not registered on this point view")]
    UnregisteredDimension(DimensionId),

    #[error("Point {point} is out of range for a point view with {len} points")]
    PointOutOfRange { point: PointId, len: usize },

    #[error("No more elements in iterator")]
    IteratorExhausted,

    /// Adding a dimension or changing the type of a dimension is only possible while the point view is empty
    #[error("Can't register dimension {dimension} after point data has been written")]
    LayoutFinalized { dimension: DimTypeId },
}

pub type Result<T> = std::result::Result<T, PointViewError>;
