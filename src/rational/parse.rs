use num_bigint::BigInt;
use num_traits::pow;
use std::str::FromStr;

use super::Rational;
use crate::Error;

// Largest accepted decimal exponent magnitude. 10^MAX_EXPONENT is computed
// eagerly, so this bounds the work a single literal can ask for.
const MAX_EXPONENT: u32 = 10_000;

/// Reasons a numeric literal is rejected by [`Rational`]'s `FromStr`.
///
/// Accepted forms are `INTEGER`, `INTEGER/INTEGER` and
/// `INTEGER.FRACTION[E EXPONENT]`, e.g. `1233`, `8093487041873/870780`,
/// `212.0231` or `-1.5E-3`. Exponents are limited to magnitudes of at most
/// 10000.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
  #[error("empty literal")]
  Empty,
  #[error("{0:?} uses a comma as decimal separator; only '.' is accepted")]
  CommaSeparator(String),
  #[error("{0:?} contains more than one '/'")]
  MultipleSlashes(String),
  #[error("{0:?} contains more than one '.'")]
  MultipleDecimalPoints(String),
  #[error("{0:?} has a separator without digits on both sides")]
  MissingComponent(String),
  #[error("{0:?} is not an integer")]
  InvalidInteger(String),
  #[error("{0:?} is not a valid exponent")]
  InvalidExponent(String),
  #[error("{0:?} has an exponent but no decimal fraction")]
  UnexpectedExponent(String),
}

impl FromStr for Rational {
  type Err = Error;

  /// Parse an exact, reduced fraction.
  ///
  /// # Errors
  /// [`Error::Format`] for malformed literals and [`Error::DivisionByZero`] for
  /// a zero denominator.
  fn from_str(literal: &str) -> Result<Rational, Error> {
    if literal.is_empty() {
      return Err(FormatError::Empty.into());
    }
    if literal.contains(',') {
      return Err(FormatError::CommaSeparator(literal.to_owned()).into());
    }

    if let Some((numer, denom)) = literal.split_once('/') {
      if denom.contains('/') {
        return Err(FormatError::MultipleSlashes(literal.to_owned()).into());
      }
      if numer.is_empty() || denom.is_empty() {
        return Err(FormatError::MissingComponent(literal.to_owned()).into());
      }
      return Ok(Rational::new(parse_integer(numer)?, parse_integer(denom)?)?.reduce());
    }

    let (mantissa, exponent) = match literal.split_once('E') {
      Some((mantissa, exponent)) => (mantissa, Some(exponent)),
      None => (literal, None),
    };
    let (int, frac) = match mantissa.split_once('.') {
      Some(parts) => parts,
      None if exponent.is_some() => {
        return Err(FormatError::UnexpectedExponent(literal.to_owned()).into());
      }
      None => return Ok(Rational::from_integer(parse_integer(mantissa)?)),
    };
    if frac.contains('.') {
      return Err(FormatError::MultipleDecimalPoints(literal.to_owned()).into());
    }
    if int.is_empty() || frac.is_empty() {
      return Err(FormatError::MissingComponent(literal.to_owned()).into());
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
      return Err(FormatError::InvalidInteger(frac.to_owned()).into());
    }
    parse_integer(int)?;
    let exponent = match exponent {
      Some(text) => match text.parse::<i32>() {
        Ok(exponent) if exponent.unsigned_abs() <= MAX_EXPONENT => exponent,
        _ => return Err(FormatError::InvalidExponent(text.to_owned()).into()),
      },
      None => 0,
    };

    // int.frac == (int frac) / 10^len(frac)
    let digits = parse_integer(&format!("{}{}", int, frac))?;
    let scale = pow(BigInt::from(10), frac.len());
    let shift = pow(BigInt::from(10), exponent.unsigned_abs() as usize);
    let (numer, denom) = if exponent >= 0 {
      (digits * shift, scale)
    } else {
      (digits, scale * shift)
    };
    Ok(Rational::new_unchecked(numer, denom).reduce())
  }
}

// Optional sign followed by at least one decimal digit.
fn parse_integer(text: &str) -> Result<BigInt, FormatError> {
  let invalid = || FormatError::InvalidInteger(text.to_owned());
  let (negative, digits) = match text.strip_prefix('-') {
    Some(digits) => (true, digits),
    None => (false, text.strip_prefix('+').unwrap_or(text)),
  };
  if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
    return Err(invalid());
  }
  let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
  Ok(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};

  fn parse(text: &str) -> Result<Rational, Error> {
    text.parse()
  }

  fn fmt_err(err: FormatError) -> Error {
    Error::Format(err)
  }

  #[test]
  fn integers() {
    assert_eq!(assert_ok!(parse("1233")).to_string(), "1233/1");
    assert_eq!(assert_ok!(parse("-17")).to_string(), "-17/1");
    assert_eq!(assert_ok!(parse("+4")).to_string(), "4/1");
  }

  #[test]
  fn fractions_are_reduced() {
    assert_eq!(assert_ok!(parse("8093487041873/870780")).to_string(), "351890740951/37860");
    assert_eq!(assert_ok!(parse("6/-8")).to_string(), "-3/4");
    assert_eq!(assert_ok!(parse("0/5")).to_string(), "0/1");
  }

  #[test]
  fn decimals() {
    assert_eq!(assert_ok!(parse("212.0231")).to_string(), "2120231/10000");
    assert_eq!(assert_ok!(parse("0.5")).to_string(), "1/2");
    assert_eq!(assert_ok!(parse("-0.25")).to_string(), "-1/4");
    assert_eq!(assert_ok!(parse("1.5E2")).to_string(), "150/1");
    assert_eq!(assert_ok!(parse("1.5E+2")).to_string(), "150/1");
    assert_eq!(assert_ok!(parse("1.5E-2")).to_string(), "3/200");
    assert_eq!(assert_ok!(parse("-2.000E0")).to_string(), "-2/1");
  }

  #[test]
  fn large_literals_are_exact() {
    let big = assert_ok!(parse("123456789012345678901234567890.000000000000000000001"));
    let expected = assert_ok!(parse(
      "123456789012345678901234567890000000000000000000001/1000000000000000000000"
    ));
    assert_eq!(big, expected);
  }

  #[test]
  fn rejected_literals() {
    assert_err_eq!(parse(""), fmt_err(FormatError::Empty));
    assert_err_eq!(parse("1,5"), fmt_err(FormatError::CommaSeparator("1,5".into())));
    assert_err_eq!(
      parse("880809870/899080/8907.9807087097"),
      fmt_err(FormatError::MultipleSlashes("880809870/899080/8907.9807087097".into()))
    );
    assert_err_eq!(parse("1.2.3"), fmt_err(FormatError::MultipleDecimalPoints("1.2.3".into())));
    assert_err_eq!(parse("/3"), fmt_err(FormatError::MissingComponent("/3".into())));
    assert_err_eq!(parse(".5"), fmt_err(FormatError::MissingComponent(".5".into())));
    assert_err_eq!(parse("5."), fmt_err(FormatError::MissingComponent("5.".into())));
    assert_err_eq!(parse("12a"), fmt_err(FormatError::InvalidInteger("12a".into())));
    assert_err_eq!(parse("-"), fmt_err(FormatError::InvalidInteger("-".into())));
    assert_err_eq!(parse("1.-5"), fmt_err(FormatError::InvalidInteger("-5".into())));
    assert_err_eq!(parse("1/2.5"), fmt_err(FormatError::InvalidInteger("2.5".into())));
    assert_err_eq!(parse("1.5Ex"), fmt_err(FormatError::InvalidExponent("x".into())));
    assert_err_eq!(parse("1.5E2E3"), fmt_err(FormatError::InvalidExponent("2E3".into())));
    assert_err_eq!(parse("12E3"), fmt_err(FormatError::UnexpectedExponent("12E3".into())));
    assert_err_eq!(parse("1_000"), fmt_err(FormatError::InvalidInteger("1_000".into())));
  }

  #[test]
  fn exponents_are_bounded() {
    assert_eq!(assert_ok!(parse("1.0E10000")).to_string(), format!("1{}/1", "0".repeat(10000)));
    assert_eq!(assert_ok!(parse("1.0E-10000")).to_string(), format!("1/1{}", "0".repeat(10000)));
    assert_err_eq!(parse("1.0E10001"), fmt_err(FormatError::InvalidExponent("10001".into())));
    assert_err_eq!(
      parse("1.0E2000000000"),
      fmt_err(FormatError::InvalidExponent("2000000000".into()))
    );
    assert_err_eq!(
      parse("-3.5E-2147483648"),
      fmt_err(FormatError::InvalidExponent("-2147483648".into()))
    );
    assert_err_eq!(
      parse("1.0E99999999999"),
      fmt_err(FormatError::InvalidExponent("99999999999".into()))
    );
  }

  #[test]
  fn zero_denominator() {
    assert_err_eq!(parse("1/0"), Error::DivisionByZero);
    assert_err_eq!(parse("0/-0"), Error::DivisionByZero);
  }
}
