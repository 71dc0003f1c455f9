#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Exact convex hulls of planar point sets.
//!
//! Two independent hull builders ([gift wrapping] and [monotone chain]) and an
//! independent [verifier] share a single geometric primitive, the
//! [orientation predicate](Orientation). Coordinates are usually
//! [`Rational`]s so every comparison is exact, but any type implementing
//! [`HullScalar`] can be used.
//!
//! ```rust
//! # use exact_hull::algorithms::convex_hull::monotone_chain;
//! # use exact_hull::data::Point;
//! # use exact_hull::verification::verify;
//! # use exact_hull::{CancelToken, Rational};
//! let points: Vec<Point<Rational>> = vec![
//!   Point::new([0, 0]).cast(Rational::from),
//!   Point::new([1, 0]).cast(Rational::from),
//!   Point::new([1, 1]).cast(Rational::from),
//!   Point::new(["1/2".parse().unwrap(), "1/2".parse().unwrap()]),
//! ];
//! let hull = monotone_chain::convex_hull(points.clone(), &CancelToken::new()).unwrap();
//! assert_eq!(hull.len(), 3);
//! assert!(verify(&points, &hull).is_ok());
//! ```
//!
//! [gift wrapping]: algorithms::convex_hull::gift_wrapping
//! [monotone chain]: algorithms::convex_hull::monotone_chain
//! [verifier]: verification
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::*;
use ordered_float::{NotNan, OrderedFloat};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::*;

pub mod algorithms;
mod cancel;
pub mod data;
mod orientation;
mod rational;
pub mod supervisor;
pub mod verification;

pub use cancel::CancelToken;
pub use orientation::{orient, Orientation};
pub use rational::{FormatError, Rational};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Malformed numeric literal: {0}")]
  Format(#[from] FormatError),
  /// A hull builder observed cancellation before it finished.
  #[error("Algorithm was cancelled before reaching a terminal state")]
  AlgorithmTimeout,
}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Numeric capabilities the hull algorithms are generic over.
///
/// Both comparison methods must be exact for the type to be used with the
/// verifier. Floating point implementations exist for experimentation: their
/// orientation test is exact for the given inputs but their arithmetic is not.
pub trait HullScalar:
  Debug + Clone + PartialEq + TotalOrd + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
  /// Sign of [`orient(p, q, r)`](orient) compared to zero.
  fn cmp_orient(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Compare the distance `p`-`q` with the distance `p`-`r`.
  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

// Every coordinate difference and product fits in an i128, so these are exact.
macro_rules! fixed_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl HullScalar for $ty {
        fn cmp_orient(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let wide = |a: &[$ty; 2]| [<i128 as From<$ty>>::from(a[0]), <i128 as From<$ty>>::from(a[1])];
          orient(&wide(p), &wide(q), &wide(r)).cmp(&0)
        }

        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let dist = |a: &[$ty; 2], b: &[$ty; 2]| {
            let dx = <i128 as From<$ty>>::from(a[0]) - <i128 as From<$ty>>::from(b[0]);
            let dy = <i128 as From<$ty>>::from(a[1]) - <i128 as From<$ty>>::from(b[1]);
            dx * dx + dy * dy
          };
          dist(p, q).cmp(&dist(p, r))
        }
      }
    )*
  };
}

// Products of 64bit differences overflow i128. Go through BigInt instead.
macro_rules! wide_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl HullScalar for $ty {
        fn cmp_orient(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let big = |a: &[$ty; 2]| [BigInt::from(a[0]), BigInt::from(a[1])];
          BigInt::cmp_orient(&big(p), &big(q), &big(r))
        }

        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let big = |a: &[$ty; 2]| [BigInt::from(a[0]), BigInt::from(a[1])];
          BigInt::cmp_dist(&big(p), &big(q), &big(r))
        }
      }
    )*
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl HullScalar for $ty {
        fn cmp_orient(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let pr_x = &p[0] - &r[0];
          let qr_y = &q[1] - &r[1];
          let pr_y = &p[1] - &r[1];
          let qr_x = &q[0] - &r[0];
          (pr_x * qr_y).cmp(&(pr_y * qr_x))
        }

        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let pq_x = &p[0] - &q[0];
          let pq_y = &p[1] - &q[1];
          let pq_dist_squared: Self = &pq_x * &pq_x + &pq_y * &pq_y;
          let pr_x = &p[0] - &r[0];
          let pr_y = &p[1] - &r[1];
          let pr_dist_squared: Self = &pr_x * &pr_x + &pr_y * &pr_y;
          pq_dist_squared.cmp(&pr_dist_squared)
        }
      }
    )*
  };
}

// The orientation test uses the adaptive predicates of `geometry_predicates`,
// which return the exact sign for any finite input. Distances are plain floating
// point.
macro_rules! floating_precision {
  ( $( $ty:ty => $inner:expr ),* ) => {
    $(
      impl HullScalar for $ty {
        fn cmp_orient(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let inner = $inner;
          let orient = geometry_predicates::predicates::orient2d(
            [inner(&p[0]), inner(&p[1])],
            [inner(&q[0]), inner(&q[1])],
            [inner(&r[0]), inner(&r[1])],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }

        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let inner = $inner;
          let dist = |a: &[$ty; 2], b: &[$ty; 2]| {
            let dx = inner(&a[0]) - inner(&b[0]);
            let dy = inner(&a[1]) - inner(&b[1]);
            dx * dx + dy * dy
          };
          OrderedFloat(dist(p, q)).cmp(&OrderedFloat(dist(p, r)))
        }
      }
    )*
  };
}

fixed_precision!(i8, i16, i32);
wide_precision!(i64, isize);
arbitrary_precision!(BigInt, BigRational, Rational);

// Same order as `OrderedFloat`, so `-0.0` and `0.0` are equal as they are under
// `PartialEq` and the orientation predicate.
impl TotalOrd for f64 {
  fn total_cmp(&self, other: &Self) -> Ordering {
    OrderedFloat(*self).cmp(&OrderedFloat(*other))
  }
}

impl TotalOrd for OrderedFloat<f64> {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self.cmp(other)
  }
}

impl TotalOrd for NotNan<f64> {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self.cmp(other)
  }
}

floating_precision!(
  f64 => |v: &f64| *v,
  OrderedFloat<f64> => |v: &OrderedFloat<f64>| v.into_inner(),
  NotNan<f64> => |v: &NotNan<f64>| v.into_inner()
);

#[cfg(test)]
pub mod testing;
