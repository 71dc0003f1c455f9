// Strategies for points and rationals.
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;
use crate::{CancelToken, HullScalar, Rational, TotalOrd};

use num_bigint::BigInt;
use num_traits::Zero;
use proptest::arbitrary::*;
use proptest::prelude::*;
use proptest::strategy::*;

use std::cell::RefCell;
use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary> Arbitrary for Point<T>
where
  T::Parameters: Clone,
{
  type Strategy = Mapped<(T, T), Point<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<(T, T)>((params.clone(), params)).prop_map(|(x, y)| Point::new([x, y]))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Convenience functions

// Arbitrary isn't defined for BigInt.
pub fn any_r() -> impl Strategy<Value = Point<BigInt>> {
  any::<Point<isize>>().prop_map(|pt| pt.cast(BigInt::from))
}

// Arbitrary isn't defined for Rational either. Numerators and denominators
// span the full i64 range, signs included.
pub fn any_scalar() -> impl Strategy<Value = Rational> {
  (any::<i64>(), any::<i64>())
    .prop_filter_map("zero denominator", |(numer, denom)| Rational::new(numer, denom).ok())
}

pub fn any_rational() -> impl Strategy<Value = Point<Rational>> {
  (any_scalar(), any_scalar()).prop_map(|(x, y)| Point::new([x, y]))
}

// Coordinates on a coarse grid of small fractions, stored unreduced. Duplicate
// and colinear points are common, which is where hull builders go wrong.
pub fn grid_rational() -> impl Strategy<Value = Point<Rational>> {
  let coord = (-6_i64..=6, 1_i64..=3, 1_i64..=3)
    .prop_map(|(numer, denom, scale)| Rational::from(numer * scale) / Rational::from(denom * scale));
  (coord.clone(), coord).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn rational_points(coords: &[[i64; 2]]) -> Vec<Point<Rational>> {
  coords
    .iter()
    .map(|&[x, y]| Point::new([Rational::from(x), Rational::from(y)]))
    .collect()
}

///////////////////////////////////////////////////////////////////////////////
// Cancellation at an exact point in a run

// An i32 coordinate that counts orientation tests. Once armed, the token is
// cancelled by the n-th test on the current thread, so the builder sees the
// cancellation at whichever poll comes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tripwire(pub i32);

thread_local! {
  static TRIPWIRE: RefCell<Option<(usize, CancelToken)>> = RefCell::new(None);
}

impl Tripwire {
  pub fn arm(tests: usize, token: &CancelToken) {
    TRIPWIRE.with(|wire| *wire.borrow_mut() = Some((tests, token.clone())));
  }

  pub fn disarm() {
    TRIPWIRE.with(|wire| *wire.borrow_mut() = None);
  }

  pub fn points(coords: &[[i32; 2]]) -> Vec<Point<Tripwire>> {
    coords
      .iter()
      .map(|&[x, y]| Point::new([Tripwire(x), Tripwire(y)]))
      .collect()
  }

  fn trip() {
    TRIPWIRE.with(|wire| {
      if let Some((remaining, token)) = wire.borrow_mut().as_mut() {
        *remaining = remaining.saturating_sub(1);
        if *remaining == 0 {
          token.cancel();
        }
      }
    });
  }
}

impl TotalOrd for Tripwire {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self.0.cmp(&other.0)
  }
}

impl Add for Tripwire {
  type Output = Tripwire;
  fn add(self, other: Tripwire) -> Tripwire {
    Tripwire(self.0 + other.0)
  }
}

impl Sub for Tripwire {
  type Output = Tripwire;
  fn sub(self, other: Tripwire) -> Tripwire {
    Tripwire(self.0 - other.0)
  }
}

impl Mul for Tripwire {
  type Output = Tripwire;
  fn mul(self, other: Tripwire) -> Tripwire {
    Tripwire(self.0 * other.0)
  }
}

impl Zero for Tripwire {
  fn zero() -> Tripwire {
    Tripwire(0)
  }

  fn is_zero(&self) -> bool {
    self.0 == 0
  }
}

impl HullScalar for Tripwire {
  fn cmp_orient(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    Tripwire::trip();
    i32::cmp_orient(&inner(p), &inner(q), &inner(r))
  }

  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    i32::cmp_dist(&inner(p), &inner(q), &inner(r))
  }
}

fn inner(pt: &[Tripwire; 2]) -> [i32; 2] {
  [pt[0].0, pt[1].0]
}
