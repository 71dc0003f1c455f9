//! Independent hull auditor.
//!
//! The verifier shares nothing with the builders except [`Orientation::new`].
//! It accepts any vertex sequence that never turns clockwise and contains
//! every input point. A colinear triple passes the turn check, but the middle
//! vertex of such a triple lies on the extension of the edge after it, so the
//! containment check rejects the hull with [`HullInvalid::PointOnExtension`]
//! whenever that vertex is also an input point.
use std::cmp::Ordering;

use crate::data::Point;
use crate::{HullScalar, Orientation};

/// Why a candidate hull was rejected. Indices refer to the input points and to
/// the hull vertices (edge `i` runs from vertex `i` to vertex `i + 1`).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HullInvalid {
  #[error("hull has no vertices but there are {points} input points")]
  EmptyHull { points: usize },
  #[error("hull is a single vertex but input point {point} differs from it")]
  PointOffVertex { point: usize },
  #[error("hull turns clockwise at vertex {vertex}")]
  ConvexViolation { vertex: usize },
  #[error("input point {point} lies outside hull edge {edge}")]
  PointOutside { edge: usize, point: usize },
  #[error("input point {point} lies on the line through hull edge {edge} but beyond its endpoints")]
  PointOnExtension { edge: usize, point: usize },
}

/// $O(n h)$ Check that `hull` is a convex hull of `points`.
///
/// * An empty hull is valid only for an empty point set.
/// * A single vertex is valid if every point equals it.
/// * Otherwise no three cyclically consecutive vertices may turn clockwise, and
///   no point may lie clockwise of any edge. Points colinear with an edge must
///   lie within the edge's bounding box.
///
/// # Errors
/// Returns the first violation found.
///
/// # Examples
///
/// ```rust
/// # use exact_hull::data::Point;
/// # use exact_hull::verification::{verify, HullInvalid};
/// let points = vec![Point::new([0, 0]), Point::new([2, 0]), Point::new([0, 2]), Point::new([1, 1])];
/// let hull = vec![Point::new([0, 0]), Point::new([2, 0]), Point::new([0, 2])];
/// assert!(verify(&points, &hull).is_ok());
///
/// // Wrong direction.
/// let clockwise = vec![Point::new([0, 0]), Point::new([0, 2]), Point::new([2, 0])];
/// assert_eq!(verify(&points, &clockwise), Err(HullInvalid::ConvexViolation { vertex: 0 }));
/// ```
pub fn verify<T>(points: &[Point<T>], hull: &[Point<T>]) -> Result<(), HullInvalid>
where
  T: HullScalar,
{
  let verdict = match hull {
    [] if points.is_empty() => Ok(()),
    [] => Err(HullInvalid::EmptyHull {
      points: points.len(),
    }),
    [vertex] => match points.iter().position(|pt| pt != vertex) {
      Some(point) => Err(HullInvalid::PointOffVertex { point }),
      None => Ok(()),
    },
    _ => check_convexity(hull).and_then(|()| check_containment(points, hull)),
  };
  if let Err(reason) = &verdict {
    tracing::debug!(%reason, points = points.len(), vertices = hull.len(), "hull rejected");
  }
  verdict
}

pub fn is_valid<T>(points: &[Point<T>], hull: &[Point<T>]) -> bool
where
  T: HullScalar,
{
  verify(points, hull).is_ok()
}

// Colinear triples are tolerated.
fn check_convexity<T: HullScalar>(hull: &[Point<T>]) -> Result<(), HullInvalid> {
  let n = hull.len();
  for vertex in 0..n {
    let turn = Orientation::new(&hull[vertex], &hull[(vertex + 1) % n], &hull[(vertex + 2) % n]);
    if turn.is_cw() {
      return Err(HullInvalid::ConvexViolation { vertex });
    }
  }
  Ok(())
}

fn check_containment<T: HullScalar>(points: &[Point<T>], hull: &[Point<T>]) -> Result<(), HullInvalid> {
  let n = hull.len();
  for edge in 0..n {
    let (start, end) = (&hull[edge], &hull[(edge + 1) % n]);
    for (point, pt) in points.iter().enumerate() {
      match Orientation::new(start, end, pt) {
        Orientation::ClockWise => return Err(HullInvalid::PointOutside { edge, point }),
        Orientation::CoLinear if !within_bounds(start, end, pt) => {
          return Err(HullInvalid::PointOnExtension { edge, point })
        }
        _ => {}
      }
    }
  }
  Ok(())
}

// `pt` lies in the axis-aligned bounding box of `start` and `end`.
pub(crate) fn within_bounds<T: HullScalar>(start: &Point<T>, end: &Point<T>, pt: &Point<T>) -> bool {
  (0..2).all(|axis| {
    let (lo, hi) = match start[axis].total_cmp(&end[axis]) {
      Ordering::Greater => (&end[axis], &start[axis]),
      _ => (&start[axis], &end[axis]),
    };
    lo.total_cmp(&pt[axis]) != Ordering::Greater && pt[axis].total_cmp(hi) != Ordering::Greater
  })
}
