use derive_more::Display;
use crate::matrix::{Op, Shape};

/// Malformed row data, rejected before a matrix is built.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display("Matrix data cannot be empty")]
    EmptyData,

    #[display("Matrix data must be a list of rows (element {row} is not a row of numbers)")]
    WrongElementType { row: usize },

    #[display("Matrix rows cannot be empty")]
    EmptyRow,

    #[display("Matrix must be rectangular (row {row} has {found} elements, expected {expected})")]
    NonRectangular { row: usize, expected: usize, found: usize },
}

impl std::error::Error for ValidationError {}

#[derive(Clone, Debug, PartialEq, Display)]
pub enum MatrixError {
    #[display("{_0}")]
    Validation(ValidationError),

    #[display("Operand must be a Matrix, got {found}")]
    NotAMatrix { found: &'static str },

    #[display("Cannot {op} matrices with dimensions ({}x{}) and ({}x{})", lhs.0, lhs.1, rhs.0, rhs.1)]
    DimensionMismatch { op: Op, lhs: Shape, rhs: Shape },

    #[display("invalid JSON: {_0}")]
    Parse(String),
}

impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrixError::Validation(e) => Some(e),
            _ => None
        }
    }
}

impl From<ValidationError> for MatrixError {
    fn from(e: ValidationError) -> Self {
        MatrixError::Validation(e)
    }
}
