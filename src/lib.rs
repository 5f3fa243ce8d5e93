//! Atomgrid: rigid-body spatial transforms for molecular coordinate grids
//!
//! This crate provides the transform core of a molecular grid pipeline:
//! unit quaternions for 3D rotations, rigid transforms (rotation about a
//! center composed with a translation), reproducible random transform
//! sampling for data augmentation, and batched application of transforms
//! to (N, 3) coordinate buffers.

use thiserror::Error;

pub mod coordinates;
pub mod random;
pub mod rotation;
pub mod transform;

// Re-export commonly used types
pub use coordinates::Point3;
pub use random::{set_random_seed, RandomSource};
pub use rotation::Quaternion;
pub use transform::Transform;

/// Main error type for the atomgrid library
#[derive(Debug, Error)]
pub enum GridError {
    /// Input and output coordinate buffers disagree in shape
    #[error("Coordinate buffer shape mismatch: input is {input:?}, output is {output:?}")]
    ShapeMismatch {
        /// Shape of the input buffer
        input: (usize, usize),
        /// Shape of the output buffer
        output: (usize, usize),
    },

    /// A coordinate buffer does not hold 3D points
    #[error("Coordinate buffer must have 3 columns, found shape ({rows}, {cols})")]
    InvalidWidth {
        /// Number of rows in the offending buffer
        rows: usize,
        /// Number of columns in the offending buffer
        cols: usize,
    },
}

/// Result type for atomgrid operations
pub type Result<T> = std::result::Result<T, GridError>;
