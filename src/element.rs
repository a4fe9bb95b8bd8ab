//! Numeric element that may be integral or fractional within the same sequence.

use std::cmp::Ordering;
use std::fmt;

/// A number that keeps the kind it was created with.
///
/// Ordering and equality are by mathematical value across both kinds, so `Int(3) == Float(3.0)`
/// and `Int(2) < Float(2.5)`. Sorting never converts between kinds, use [`Number::identical`] to
/// check that an element came out exactly as it went in.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Integral,
    Fractional,
}

impl Number {
    pub fn kind(&self) -> Kind {
        match self {
            Number::Int(_) => Kind::Integral,
            Number::Float(_) => Kind::Fractional,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Number::Float(x) if x.is_nan())
    }

    /// Same kind and same value, floats compared bit for bit. Unlike `==` this tells `3` and `3.0`
    /// apart, and considers a NaN identical to itself.
    pub fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }

    /// Lossy for integers beyond 2^53.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(x) => x as f64,
            Number::Float(x) => x,
        }
    }
}

// 2^63, exactly representable as f64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison of an integer with a float, without rounding the integer through f64.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }

    if float >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if float < -I64_BOUND {
        return Some(Ordering::Greater);
    }

    // float is now in [-2^63, 2^63), so its integral part fits into i64.
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => {
            // The fractional part carries the sign of float.
            let fract = float - whole;
            if fract > 0.0 {
                Some(Ordering::Less)
            } else if fract < 0.0 {
                Some(Ordering::Greater)
            } else {
                Some(Ordering::Equal)
            }
        }
        ordering => Some(ordering),
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(x) => write!(f, "{x}"),
            // Debug keeps the trailing `.0`, so 3 and 3.0 stay distinguishable.
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident, $target:ty, $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Number::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from!(Int, i64, i8, i16, i32, i64, u8, u16, u32);
impl_from!(Float, f64, f32, f64);

/// Builds a `Vec<Number>` from literals, keeping each literal's kind.
///
/// `nums![5, 1.5, -3]` yields `[Int(5), Float(1.5), Int(-3)]`.
#[macro_export]
macro_rules! nums {
    ($($value:expr),* $(,)?) => {{
        let v: ::std::vec::Vec<$crate::Number> = ::std::vec![$($crate::Number::from($value)),*];
        v
    }};
}
