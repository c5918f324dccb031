mod dense;
pub use dense::*;

mod op;
pub use op::*;

pub mod json;

/// `(rows, cols)`
pub type Shape = (usize, usize);
