use std::cmp::Ordering;
use std::ops::{Mul, Sub};

use crate::HullScalar;

/// Twice the signed area of the triangle `a`-`b`-`c`.
///
/// Positive when `a -> b -> c` turns counter-clockwise, negative when it turns
/// clockwise, and zero when the three points are colinear.
///
/// This is the only geometric primitive used by the hull builders and the
/// verifier. They go through [`Orientation::new`], which is the exact sign of
/// this value.
///
/// # Examples
///
/// ```rust
/// # use exact_hull::orient;
/// assert_eq!(orient(&[0, 0], &[1, 0], &[0, 1]), 1);
/// assert_eq!(orient(&[0, 0], &[0, 1], &[1, 0]), -1);
/// assert_eq!(orient(&[0, 0], &[1, 1], &[2, 2]), 0);
/// ```
pub fn orient<T>(a: &[T; 2], b: &[T; 2], c: &[T; 2]) -> T
where
  T: Clone + Sub<Output = T> + Mul<Output = T>,
{
  let ac_x = a[0].clone() - c[0].clone();
  let bc_y = b[1].clone() - c[1].clone();
  let ac_y = a[1].clone() - c[1].clone();
  let bc_x = b[0].clone() - c[0].clone();
  ac_x * bc_y - ac_y * bc_x
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// For fixed-precision types (i8,i16,i32,i64) this never overflows.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use exact_hull::data::Point;
  /// # use exact_hull::Orientation;
  /// let p1 = Point::new([ 0, 0 ]);
  /// let p2 = Point::new([ 0, 1 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0, 2 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1, 2 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1, 2 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: HullScalar,
  {
    match T::cmp_orient(p1, p2, p3) {
      Ordering::Less => Orientation::ClockWise,
      Ordering::Equal => Orientation::CoLinear,
      Ordering::Greater => Orientation::CounterClockWise,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
