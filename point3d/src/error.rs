//! Error type shared by the point operations.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Point3Error>;

/// Failures reported by [`Point3D`](crate::geometry::Point3D) construction
/// and indexed access.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Point3Error {
    /// A constructor argument could not be turned into a number.
    #[error("cannot convert {value:?} to a coordinate")]
    TypeConversion { value: String },

    /// Component index outside `0..=2`.
    #[error("{point} has no component {index}")]
    IndexOutOfRange { index: i64, point: String },

    /// More than three positional components were supplied.
    #[error("expected at most 3 components, got {0}")]
    TooManyComponents(usize),
}
