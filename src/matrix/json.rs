//! Loading matrices from untyped JSON.
//!
//! Operands that come in as JSON carry no static type, so this is where
//! "not a matrix at all" and "not a list of rows" are told apart.

use serde_json::Value;
use crate::math::Number;
use crate::utils::{MatrixError, ValidationError};
use super::Matrix;

pub fn matrix_from_str(text: &str) -> Result<Matrix<Number>, MatrixError> {
    let value: Value = serde_json::from_str(text).map_err(|e|
        MatrixError::Parse(e.to_string())
    )?;
    matrix_from_value(&value)
}

pub fn matrix_from_value(value: &Value) -> Result<Matrix<Number>, MatrixError> {
    let Value::Array(rows) = value else {
        return Err(MatrixError::NotAMatrix { found: kind_of(value) })
    };

    if rows.is_empty() {
        return Err(ValidationError::EmptyData.into())
    }

    let rows = rows.iter().enumerate().map(|(i, row)|
        parse_row(i, row)
    ).collect::<Result<Vec<_>, _>>()?;

    Matrix::new(rows)
}

fn parse_row(i: usize, row: &Value) -> Result<Vec<Number>, ValidationError> {
    let wrong_type = || ValidationError::WrongElementType { row: i };

    let Value::Array(entries) = row else {
        return Err(wrong_type())
    };

    entries.iter().map(|e|
        Number::from_json(e).ok_or_else(wrong_type)
    ).collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_)  => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(text: &str) -> MatrixError {
        matrix_from_str(text).unwrap_err()
    }

    #[test]
    fn load() {
        let a = matrix_from_str("[[1, 2], [3, 4.5]]").unwrap();
        assert_eq!(a.shape(), (2, 2));
        assert!(a[(0, 0)].is_int());
        assert!(a[(1, 1)].is_float());
        assert_eq!(a.to_string(), "[[1, 2],[3, 4.5]]");
    }

    #[test]
    fn not_a_matrix() {
        assert_eq!(err("5"), MatrixError::NotAMatrix { found: "number" });
        assert_eq!(err("\"abc\""), MatrixError::NotAMatrix { found: "string" });
        assert_eq!(err("{\"a\": 1}"), MatrixError::NotAMatrix { found: "object" });
        assert_eq!(err("null"), MatrixError::NotAMatrix { found: "null" });
    }

    #[test]
    fn empty() {
        assert_eq!(err("[]"), MatrixError::from(ValidationError::EmptyData));
    }

    #[test]
    fn wrong_element_type() {
        assert_eq!(err("[1, 2]"), MatrixError::from(ValidationError::WrongElementType { row: 0 }));
        assert_eq!(err("[[1, 2], 3]"), MatrixError::from(ValidationError::WrongElementType { row: 1 }));
        assert_eq!(err("[[1, \"x\"]]"), MatrixError::from(ValidationError::WrongElementType { row: 0 }));
    }

    #[test]
    fn wrong_type_precedes_shape_checks() {
        assert_eq!(err("[[], 3]"), MatrixError::from(ValidationError::WrongElementType { row: 1 }));
        assert_eq!(err("[[1], [2, 3], null]"), MatrixError::from(ValidationError::WrongElementType { row: 2 }));
    }

    #[test]
    fn empty_row() {
        assert_eq!(err("[[]]"), MatrixError::from(ValidationError::EmptyRow));
        assert_eq!(err("[[], [1]]"), MatrixError::from(ValidationError::EmptyRow));
    }

    #[test]
    fn non_rectangular() {
        assert_eq!(
            err("[[1, 2], [3]]"),
            MatrixError::from(ValidationError::NonRectangular { row: 1, expected: 2, found: 1 })
        );
    }

    #[test]
    fn parse_error() {
        assert!(matches!(err("[[1, 2]"), MatrixError::Parse(_)));
    }
}
