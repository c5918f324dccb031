mod traits;
pub use traits::*;

mod number;
pub use number::*;
