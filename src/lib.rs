//! Dense matrices with checked arithmetic.
//!
//! A [`Matrix`] is built once from rectangular row data and never
//! changes afterwards. [`Matrix::add`], [`Matrix::subtract`] and
//! [`Matrix::multiply`] each return a new matrix, or a [`MatrixError`]
//! carrying both shapes when the operands don't fit together.
//!
//! ```
//! use matcalc::Matrix;
//!
//! let a = Matrix::new([[1, 2], [3, 4]]).unwrap();
//! let b = Matrix::new([[2, 0], [1, 3]]).unwrap();
//!
//! assert_eq!(a.add(&b).unwrap().to_string(), "[[3, 2],[4, 7]]");
//! assert_eq!(a.multiply(&b).unwrap().to_string(), "[[4, 6],[10, 12]]");
//! ```

mod math;
pub use math::*;

pub mod matrix;
pub use matrix::{Matrix, Op, Shape};

pub mod utils;
pub use utils::{MatrixError, ValidationError};
