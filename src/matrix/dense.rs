use std::fmt::{self, Debug, Display};
use std::ops::Index;
use itertools::Itertools;
use log::{debug, trace};
use ndarray::{Array2, ArrayView1, Zip};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::Elem;
use crate::utils::{MatrixError, ValidationError};
use super::{Op, Shape};

/// A dense, non-empty, rectangular matrix.
///
/// The entries are copied in at construction and never change
/// afterwards: every operation returns a new matrix.
#[derive(Clone, PartialEq)]
pub struct Matrix<R> {
    array: Array2<R>
}

impl<R> Matrix<R>
where R: Clone {
    /// Builds a matrix from its rows.
    ///
    /// Fails if there are no rows, if the first row is empty, or if
    /// the rows differ in length.
    pub fn new<I, Row>(data: I) -> Result<Self, MatrixError>
    where I: IntoIterator<Item = Row>, Row: AsRef<[R]> {
        let rows = data.into_iter().collect_vec();
        let shape = validate_shape(rows.iter().map(|row| row.as_ref().len()))?;
        let array = Array2::from_shape_fn(shape, |(i, j)|
            rows[i].as_ref()[j].clone()
        );
        Ok(Self { array })
    }

    pub fn to_vec(&self) -> Vec<Vec<R>> {
        self.array.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl<R> Matrix<R> {
    pub fn shape(&self) -> Shape {
        (self.rows(), self.cols())
    }

    pub fn rows(&self) -> usize {
        self.array.nrows()
    }

    pub fn cols(&self) -> usize {
        self.array.ncols()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&R> {
        self.array.get((i, j))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        self.array.indexed_iter().map(|((i, j), a)| (i, j, a))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = ArrayView1<'_, R>> {
        self.array.rows().into_iter()
    }

    pub fn map<S, F>(&self, f: F) -> Matrix<S>
    where F: FnMut(&R) -> S {
        Matrix { array: self.array.map(f) }
    }
}

impl<R> Matrix<R>
where R: Elem {
    /// Entry-wise sum. Both operands must have the same shape.
    pub fn add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.ensure(Op::Add, rhs)?;

        let array = Zip::from(&self.array).and(&rhs.array).map_collect(|a, b|
            a.clone() + b.clone()
        );
        Ok(Self { array })
    }

    /// Entry-wise difference. Both operands must have the same shape.
    pub fn subtract(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.ensure(Op::Sub, rhs)?;

        let array = Zip::from(&self.array).and(&rhs.array).map_collect(|a, b|
            a.clone() - b.clone()
        );
        Ok(Self { array })
    }

    /// Matrix product `self * rhs`. Requires `self.cols() == rhs.rows()`,
    /// the result has shape `(self.rows(), rhs.cols())`.
    pub fn multiply(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.ensure(Op::Mul, rhs)?;

        let (l, m, n) = (self.rows(), self.cols(), rhs.cols());
        let array = Array2::from_shape_fn((l, n), |(i, k)| {
            (0..m).fold(R::zero(), |acc, j|
                acc + self.array[[i, j]].clone() * rhs.array[[j, k]].clone()
            )
        });
        Ok(Self { array })
    }

    pub fn dot(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.multiply(rhs)
    }

    fn ensure(&self, op: Op, rhs: &Self) -> Result<(), MatrixError> {
        let (lhs, rhs) = (self.shape(), rhs.shape());
        trace!("{op}: {:?}, {:?}", lhs, rhs);

        if op.accepts(lhs, rhs) {
            Ok(())
        } else {
            debug!("cannot {op} {:?} and {:?}.", lhs, rhs);
            Err(MatrixError::DimensionMismatch { op, lhs, rhs })
        }
    }
}

/// Checks row lengths and returns the shape they describe.
pub(crate) fn validate_shape<I>(lens: I) -> Result<Shape, ValidationError>
where I: IntoIterator<Item = usize> {
    let mut lens = lens.into_iter();

    let Some(n) = lens.next() else {
        return Err(ValidationError::EmptyData)
    };

    if n == 0 {
        return Err(ValidationError::EmptyRow)
    }

    let mut m = 1;
    for found in lens {
        if found != n {
            return Err(ValidationError::NonRectangular { row: m, expected: n, found })
        }
        m += 1;
    }

    Ok((m, n))
}

impl<R> TryFrom<Vec<Vec<R>>> for Matrix<R>
where R: Clone {
    type Error = MatrixError;
    fn try_from(data: Vec<Vec<R>>) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

impl<R> TryFrom<&[Vec<R>]> for Matrix<R>
where R: Clone {
    type Error = MatrixError;
    fn try_from(data: &[Vec<R>]) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

impl<R> TryFrom<Array2<R>> for Matrix<R> {
    type Error = MatrixError;
    fn try_from(array: Array2<R>) -> Result<Self, Self::Error> {
        if array.nrows() == 0 {
            Err(ValidationError::EmptyData.into())
        } else if array.ncols() == 0 {
            Err(ValidationError::EmptyRow.into())
        } else {
            Ok(Self { array })
        }
    }
}

impl<R> Index<(usize, usize)> for Matrix<R> {
    type Output = R;
    fn index(&self, index: (usize, usize)) -> &R {
        &self.array[[index.0, index.1]]
    }
}

/// `[[1, 2],[3, 4]]`
impl<R> Display for Matrix<R>
where R: Debug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.iter_rows().map(|row|
            format!("[{}]", row.iter().map(|a| format!("{a:?}")).join(", "))
        ).join(",");
        write!(f, "[{rows}]")
    }
}

/// `Matrix([[1, 2], [3, 4]])`
impl<R> Debug for Matrix<R>
where R: Debug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.iter_rows().map(|row|
            format!("[{}]", row.iter().map(|a| format!("{a:?}")).join(", "))
        ).join(", ");
        write!(f, "Matrix([{rows}])")
    }
}

impl<R> Serialize for Matrix<R>
where R: Serialize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.collect_seq(self.iter_rows().map(|row| row.into_iter().collect_vec()))
    }
}

impl<'de, R> Deserialize<'de> for Matrix<R>
where R: Deserialize<'de> + Clone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        let rows = Vec::<Vec<R>>::deserialize(deserializer)?;
        Self::new(rows).map_err(serde::de::Error::custom)
    }
}
