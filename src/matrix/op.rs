use derive_more::Display;
use crate::math::Elem;
use crate::utils::MatrixError;
use super::{Matrix, Shape};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Op {
    #[display("add")]
    Add,
    #[display("subtract")]
    Sub,
    #[display("multiply")]
    Mul,
}

impl Op {
    /// Whether operands of the given shapes can be combined.
    pub fn accepts(&self, lhs: Shape, rhs: Shape) -> bool {
        match self {
            Op::Add | Op::Sub => lhs == rhs,
            Op::Mul => lhs.1 == rhs.0
        }
    }

    pub fn output_shape(&self, lhs: Shape, rhs: Shape) -> Option<Shape> {
        if !self.accepts(lhs, rhs) {
            return None
        }
        match self {
            Op::Add | Op::Sub => Some(lhs),
            Op::Mul => Some((lhs.0, rhs.1))
        }
    }

    pub fn apply<R>(&self, a: &Matrix<R>, b: &Matrix<R>) -> Result<Matrix<R>, MatrixError>
    where R: Elem {
        match self {
            Op::Add => a.add(b),
            Op::Sub => a.subtract(b),
            Op::Mul => a.multiply(b)
        }
    }
}
