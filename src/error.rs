//! Errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("Index {index} is out of range for a vector with {dimension} components")]
    IndexOutOfRange { index: usize, dimension: usize },

    #[error("Tried to divide a vector by zero")]
    DivisionByZero,

    #[error("The angle involving a vector of zero or non-finite magnitude is undefined")]
    UndefinedAngle,
}

impl VectorError {
    /// Checks that `index` addresses one of the `dimension` components.
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] if `index >= dimension`.
    pub(crate) fn check_index(index: usize, dimension: usize) -> Result<()> {
        if index < dimension {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, dimension })
        }
    }
}
