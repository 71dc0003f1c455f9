use super::Cancelled;
use crate::data::{Hull, Point};
use crate::{CancelToken, HullScalar, Orientation, TotalOrd};

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Monotone chain][wiki] scan, a variant of Graham scan that sorts by
/// coordinates instead of by angle. Points are sorted by x and then y, and two
/// chains are built with a pruning stack: the lower chain from left to right
/// and the upper chain from right to left. A middle point is pruned unless its
/// neighbours turn strictly counter-clockwise, so colinear points and
/// duplicates never become vertices.
///
/// # Errors
/// Returns the vertices stacked so far if `token` is cancelled. The token is
/// checked on entry and before each point is pushed.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * Inputs of fewer than three points are returned as given.
///
/// # Examples
///
/// ```rust
/// # use exact_hull::algorithms::convex_hull::monotone_chain::convex_hull;
/// # use exact_hull::data::Point;
/// # use exact_hull::CancelToken;
/// let points = vec![
///   Point::new([2, 0]),
///   Point::new([0, 0]),
///   Point::new([1, 0]),
/// ];
/// let hull = convex_hull(points, &CancelToken::new()).unwrap();
/// assert_eq!(hull.vertices(), &[Point::new([0, 0]), Point::new([2, 0])]);
/// ```
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull<T>(mut pts: Vec<Point<T>>, token: &CancelToken) -> Result<Hull<T>, Cancelled<T>>
where
  T: HullScalar,
{
  if token.is_cancelled() {
    return Err(cancelled(Vec::new()));
  }
  if pts.len() < 3 {
    return Ok(Hull::new_unchecked(pts));
  }
  pts.sort_unstable_by(TotalOrd::total_cmp);

  let mut lower = Vec::with_capacity(pts.len());
  if !half_hull(&pts, &mut lower, token) {
    return Err(cancelled(lower));
  }

  pts.reverse();
  let mut upper = Vec::with_capacity(pts.len());
  if !half_hull(&pts, &mut upper, token) {
    lower.append(&mut upper);
    return Err(cancelled(lower));
  }

  // Both chains contain the leftmost and the rightmost point.
  let end = upper.len() - 1;
  lower.extend(upper.drain(1..end));
  Ok(Hull::new_unchecked(lower))
}

// Push every point onto `chain`, keeping only strict left turns. Returns false
// if the token was cancelled before all points were pushed.
fn half_hull<T>(pts: &[Point<T>], chain: &mut Vec<Point<T>>, token: &CancelToken) -> bool
where
  T: HullScalar,
{
  for pt in pts {
    if token.is_cancelled() {
      return false;
    }
    chain.push(pt.clone());
    while chain.len() > 2 {
      let n = chain.len();
      if Orientation::new(&chain[n - 3], &chain[n - 2], &chain[n - 1]).is_ccw() {
        break;
      }
      chain.remove(n - 2);
    }
  }
  true
}

fn cancelled<T>(partial: Vec<Point<T>>) -> Cancelled<T> {
  tracing::debug!(vertices = partial.len(), "monotone chain cancelled");
  Cancelled { partial }
}
