use array_init::array_init;
use num_bigint::BigInt;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use crate::{Rational, TotalOrd};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl Point<Rational> {
  /// Exact conversion from floating point coordinates. Returns `None` for NaN
  /// and infinities.
  pub fn from_f64(array: [f64; 2]) -> Option<Point<Rational>> {
    Some(Point::new([
      Rational::from_float(array[0])?,
      Rational::from_float(array[1])?,
    ]))
  }
}

// Lexicographic: x first, then y.
impl<T: TotalOrd> TotalOrd for Point<T> {
  fn total_cmp(&self, other: &Self) -> Ordering {
    TotalOrd::total_cmp(
      &(self.x_coord(), self.y_coord()),
      &(other.x_coord(), other.y_coord()),
    )
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<Point<i64>> for Point<BigInt> {
  fn from(point: Point<i64>) -> Point<BigInt> {
    point.cast(BigInt::from)
  }
}

impl From<Point<i64>> for Point<Rational> {
  fn from(point: Point<i64>) -> Point<Rational> {
    point.cast(Rational::from)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}
