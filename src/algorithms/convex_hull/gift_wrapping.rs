use std::cmp::Ordering;

use super::Cancelled;
use crate::data::{Hull, Point};
use crate::{CancelToken, HullScalar, Orientation, TotalOrd};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    All Ok results are convex and counter-clockwise.
//    No points are outside the resulting hull.
//    No vertex lies strictly between two other vertices.
/// $O(n h)$ Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] (Jarvis march) walks around the point set, starting
/// at the lexicographically smallest point, always picking the next point such
/// that nothing lies to its right. Input points are moved into the hull as they
/// are picked so the working set shrinks as the walk progresses. No sorting is
/// involved.
///
/// # Errors
/// Returns the vertices found so far if `token` is cancelled. The token is
/// checked before each new vertex and for every point considered as a
/// candidate.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * Inputs with fewer than three distinct points give hulls with fewer than
///   three vertices.
///
/// # Examples
///
/// ```rust
/// # use exact_hull::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use exact_hull::data::Point;
/// # use exact_hull::CancelToken;
/// let empty_set: Vec<Point<i32>> = vec![];
/// assert!(convex_hull(empty_set, &CancelToken::new()).unwrap().is_empty());
///
/// let dups = vec![Point::new([0, 0])].repeat(3);
/// assert_eq!(
///   convex_hull(dups, &CancelToken::new()).unwrap().vertices(),
///   &[Point::new([0, 0])]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(mut pts: Vec<Point<T>>, token: &CancelToken) -> Result<Hull<T>, Cancelled<T>>
where
  T: HullScalar,
{
  let mut hull: Vec<Point<T>> = Vec::new();
  let start = match smallest_point_index(&pts) {
    Some(start) => start,
    None => return Ok(Hull::new_unchecked(hull)),
  };
  hull.push(pts.swap_remove(start));

  loop {
    if token.is_cancelled() {
      return Err(cancelled(hull));
    }
    match next_vertex(&pts, &hull, token) {
      Step::Extend(next) => hull.push(pts.swap_remove(next)),
      Step::Closed => break,
      Step::Cancelled => return Err(cancelled(hull)),
    }
  }

  Ok(Hull::new_unchecked(hull))
}

enum Step {
  Extend(usize),
  Closed,
  Cancelled,
}

// Find the remaining point that has nothing to its right when seen from the
// last hull vertex. Once the hull has two vertices the first vertex competes
// too: if it wins, the hull is closed.
fn next_vertex<T>(pts: &[Point<T>], hull: &[Point<T>], token: &CancelToken) -> Step
where
  T: HullScalar,
{
  let last = match hull.last() {
    Some(last) => last,
    None => return Step::Closed,
  };
  let closing = if hull.len() >= 2 { hull.first() } else { None };
  let mut candidate: Option<usize> = None;

  for (i, pt) in pts.iter().enumerate() {
    if token.is_cancelled() {
      return Step::Cancelled;
    }
    if pt == last {
      continue;
    }
    let target = match candidate.map(|c| &pts[c]).or(closing) {
      Some(target) => target,
      None => {
        candidate = Some(i);
        continue;
      }
    };
    if wraps_outside(last, target, pt) {
      candidate = Some(i);
    }
  }

  match candidate {
    Some(next) => Step::Extend(next),
    None => Step::Closed,
  }
}

// `pt` is a better next vertex than `target`: it lies to the right of
// last->target, or on the same ray but farther away.
fn wraps_outside<T>(last: &Point<T>, target: &Point<T>, pt: &Point<T>) -> bool
where
  T: HullScalar,
{
  match Orientation::new(last, target, pt) {
    Orientation::ClockWise => true,
    Orientation::CounterClockWise => false,
    Orientation::CoLinear => {
      same_ray(last, target, pt) && T::cmp_dist(last, pt, target) == Ordering::Greater
    }
  }
}

// Only meaningful for colinear points.
fn same_ray<T: HullScalar>(origin: &Point<T>, a: &Point<T>, b: &Point<T>) -> bool {
  (0..2).all(|axis| origin[axis].total_cmp(&a[axis]) == origin[axis].total_cmp(&b[axis]))
}

fn cancelled<T>(partial: Vec<Point<T>>) -> Cancelled<T> {
  tracing::debug!(vertices = partial.len(), "gift wrapping cancelled");
  Cancelled { partial }
}

// Index of the smallest point, ordered by x and then y.
// O(n)
fn smallest_point_index<T>(pts: &[Point<T>]) -> Option<usize>
where
  T: HullScalar,
{
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| TotalOrd::total_cmp(*a, *b))
    .map(|(index, _)| index)
}
