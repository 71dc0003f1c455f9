use num::Integer;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;

use crate::Error;

mod ops;
mod parse;

pub use parse::FormatError;

/// Exact fraction of two arbitrary-precision integers.
///
/// The denominator is always positive. Values are not kept in lowest terms:
/// arithmetic never reduces and comparisons cross-multiply, so `2/4 == 1/2`
/// holds without reducing either side. Call [`Rational::reduce`] where operand
/// growth needs to be bounded.
///
/// ```rust
/// # use exact_hull::Rational;
/// let half = Rational::new(2, 4).unwrap();
/// assert_eq!(half, "1/2".parse::<Rational>().unwrap());
/// assert_eq!(half.to_string(), "2/4");
/// assert_eq!(half.reduce().to_string(), "1/2");
/// ```
#[derive(Clone, Debug)]
pub struct Rational {
  numer: BigInt,
  denom: BigInt,
}

impl Rational {
  /// # Errors
  /// Returns [`Error::DivisionByZero`] if `denom` is zero.
  pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Rational, Error> {
    let denom = denom.into();
    if denom.is_zero() {
      return Err(Error::DivisionByZero);
    }
    Ok(Rational::new_unchecked(numer.into(), denom))
  }

  // Caller guarantees that denom is non-zero.
  pub(crate) fn new_unchecked(numer: BigInt, denom: BigInt) -> Rational {
    debug_assert!(!denom.is_zero());
    if denom.is_negative() {
      Rational {
        numer: -numer,
        denom: -denom,
      }
    } else {
      Rational { numer, denom }
    }
  }

  pub fn from_integer(n: impl Into<BigInt>) -> Rational {
    Rational {
      numer: n.into(),
      denom: BigInt::one(),
    }
  }

  /// Exact value of a finite float. Returns `None` for NaN and infinities.
  pub fn from_float(f: f64) -> Option<Rational> {
    num::BigRational::from_float(f).map(Rational::from)
  }

  pub fn numer(&self) -> &BigInt {
    &self.numer
  }

  /// Always positive.
  pub fn denom(&self) -> &BigInt {
    &self.denom
  }

  /// Divide numerator and denominator by their greatest common divisor.
  #[must_use]
  pub fn reduce(&self) -> Rational {
    let gcd = self.numer.gcd(&self.denom);
    if gcd.is_one() {
      return self.clone();
    }
    Rational {
      numer: &self.numer / &gcd,
      denom: &self.denom / &gcd,
    }
  }

  pub fn is_reduced(&self) -> bool {
    self.numer.gcd(&self.denom).is_one()
  }

  /// # Errors
  /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
  pub fn checked_div(&self, rhs: &Rational) -> Result<Rational, Error> {
    if rhs.numer.is_zero() {
      return Err(Error::DivisionByZero);
    }
    Ok(Rational::new_unchecked(
      &self.numer * &rhs.denom,
      &self.denom * &rhs.numer,
    ))
  }

  pub fn is_negative(&self) -> bool {
    self.numer.is_negative()
  }
}

impl PartialEq for Rational {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

// Denominators are positive so cross-multiplying preserves the order.
impl Ord for Rational {
  fn cmp(&self, other: &Self) -> Ordering {
    if self.denom == other.denom {
      return self.numer.cmp(&other.numer);
    }
    (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
  }
}

impl fmt::Display for Rational {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.numer, self.denom)
  }
}

impl Zero for Rational {
  fn zero() -> Rational {
    Rational::from_integer(BigInt::zero())
  }

  fn is_zero(&self) -> bool {
    self.numer.is_zero()
  }
}

impl One for Rational {
  fn one() -> Rational {
    Rational::from_integer(BigInt::one())
  }
}

impl From<i32> for Rational {
  fn from(n: i32) -> Rational {
    Rational::from_integer(n)
  }
}

impl From<i64> for Rational {
  fn from(n: i64) -> Rational {
    Rational::from_integer(n)
  }
}

impl From<BigInt> for Rational {
  fn from(n: BigInt) -> Rational {
    Rational::from_integer(n)
  }
}

impl From<BigRational> for Rational {
  fn from(ratio: BigRational) -> Rational {
    let (numer, denom) = ratio.into_raw();
    Rational::new_unchecked(numer, denom)
  }
}

impl From<Rational> for BigRational {
  fn from(rational: Rational) -> BigRational {
    BigRational::new(rational.numer, rational.denom)
  }
}
