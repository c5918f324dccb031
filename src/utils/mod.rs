mod err;
pub use err::*;

pub mod log;
