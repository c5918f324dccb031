use std::fmt::Debug;
use std::ops::{Sub, Mul};
use num_traits::Zero;

/// Entries a [`Matrix`](crate::Matrix) can do arithmetic on.
/// 
/// `Zero` brings `Add` along with it and gives the seed for the
/// sums in matrix multiplication.
pub trait Elem: Clone + Debug + Zero + Sub<Output = Self> + Mul<Output = Self> {}

impl<T> Elem for T
where T: Clone + Debug + Zero + Sub<Output = T> + Mul<Output = T> {}
