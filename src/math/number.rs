use std::fmt::{self, Debug, Display};
use std::ops::{Add, Sub, Mul};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// A number that is either an exact integer or a float.
///
/// Arithmetic between two `Int`s stays exact, anything involving a
/// `Float` is carried out in `f64`. An integer result that would
/// overflow `i64` is promoted to `Float`.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(a) => a as f64,
            Number::Float(a) => a
        }
    }

    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        value.as_i64().map(Number::Int).or_else(||
            value.as_f64().map(Number::Float)
        )
    }
}

impl From<i32> for Number {
    fn from(a: i32) -> Self {
        Number::Int(a.into())
    }
}

impl From<i64> for Number {
    fn from(a: i64) -> Self {
        Number::Int(a)
    }
}

impl From<f64> for Number {
    fn from(a: f64) -> Self {
        Number::Float(a)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            _ => self.to_f64() == other.to_f64()
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(a) => Display::fmt(a, f),
            Number::Float(a) => Debug::fmt(a, f) // keeps the trailing `.0`
        }
    }
}

impl Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Number::Int(0)
    }

    fn is_zero(&self) -> bool {
        match self {
            Number::Int(a) => a.is_zero(),
            Number::Float(a) => a.is_zero()
        }
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait for Number {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    (Number::Int(a), Number::Int(b)) => match a.$checked(b) {
                        Some(c) => Number::Int(c),
                        None => Number::Float((a as f64).$method(b as f64))
                    },
                    (a, b) => Number::Float(a.to_f64().$method(b.to_f64()))
                }
            }
        }

        impl<'a> $trait<&'a Number> for &'a Number {
            type Output = Number;

            fn $method(self, rhs: &'a Number) -> Self::Output {
                (*self).$method(*rhs)
            }
        }
    };
}

impl_binop!(Add, add, checked_add);
impl_binop!(Sub, sub, checked_sub);
impl_binop!(Mul, mul, checked_mul);

#[cfg(test)]
mod tests {
    use super::*;
    use Number::{Int, Float};

    #[test]
    fn int_ops_stay_exact() {
        assert!(matches!(Int(2) + Int(3), Int(5)));
        assert!(matches!(Int(2) - Int(3), Int(-1)));
        assert!(matches!(Int(2) * Int(3), Int(6)));
    }

    #[test]
    fn float_promotes() {
        let c = Int(2) + Float(0.5);
        assert!(c.is_float());
        assert_eq!(c, Float(2.5));

        let c = Float(1.5) * Int(2);
        assert!(c.is_float());
        assert_eq!(c, Int(3));
    }

    #[test]
    fn overflow_promotes() {
        let c = Int(i64::MAX) + Int(1);
        assert!(c.is_float());
        assert_eq!(c.to_f64(), i64::MAX as f64 + 1.0);

        let c = Int(i64::MIN) - Int(1);
        assert!(c.is_float());

        let c = Int(i64::MAX) * Int(2);
        assert!(c.is_float());
    }

    #[test]
    fn eq_across_variants() {
        assert_eq!(Int(2), Float(2.0));
        assert_ne!(Int(2), Float(2.5));
        assert_ne!(Int(2), Int(3));
    }

    #[test]
    fn zero() {
        assert!(Number::zero().is_zero());
        assert!(Float(0.0).is_zero());
        assert!(!Int(1).is_zero());
    }

    #[test]
    fn display() {
        assert_eq!(Int(3).to_string(), "3");
        assert_eq!(Float(3.0).to_string(), "3.0");
        assert_eq!(Float(-2.5).to_string(), "-2.5");
        assert_eq!(format!("{:?}", Int(-7)), "-7");
    }

    #[test]
    fn from_json() {
        let v: serde_json::Value = serde_json::from_str("[1, 2.5, \"x\"]").unwrap();
        let v = v.as_array().unwrap();

        assert!(matches!(Number::from_json(&v[0]), Some(Int(1))));
        assert!(matches!(Number::from_json(&v[1]), Some(Float(a)) if a == 2.5));
        assert!(Number::from_json(&v[2]).is_none());
    }

    #[test]
    fn serde_untagged() {
        let xs: Vec<Number> = serde_json::from_str("[1, -2, 0.25]").unwrap();
        assert!(xs[0].is_int());
        assert!(xs[1].is_int());
        assert!(xs[2].is_float());

        let s = serde_json::to_string(&xs).unwrap();
        assert_eq!(s, "[1,-2,0.25]");
    }
}
