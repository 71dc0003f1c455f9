//! Convex hull builders.
//!
//! Both builders consume their input, poll a [`CancelToken`] while they work,
//! and return a counter-clockwise [`Hull`]. A builder that observes
//! cancellation stops at the next poll and hands back whatever it had built in
//! [`Cancelled::partial`].
use std::fmt;

use crate::data::{Hull, Point};
use crate::verification::within_bounds;
use crate::{CancelToken, Error, HullScalar, Orientation, TotalOrd};

pub mod gift_wrapping;
pub mod monotone_chain;

/// A hull builder saw the cancellation flag before it finished.
///
/// The partial vertices are not a hull of the input and must not be verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancelled<T> {
  pub partial: Vec<Point<T>>,
}

impl<T> Cancelled<T> {
  pub fn into_partial(self) -> Vec<Point<T>> {
    self.partial
  }
}

impl<T> fmt::Display for Cancelled<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "hull construction cancelled after {} vertices",
      self.partial.len()
    )
  }
}

impl<T: fmt::Debug> std::error::Error for Cancelled<T> {}

impl<T> From<Cancelled<T>> for Error {
  fn from(_: Cancelled<T>) -> Error {
    Error::AlgorithmTimeout
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
  GiftWrapping,
  MonotoneChain,
}

impl Algorithm {
  pub const ALL: [Algorithm; 2] = [Algorithm::GiftWrapping, Algorithm::MonotoneChain];

  pub fn name(self) -> &'static str {
    match self {
      Algorithm::GiftWrapping => "Gift Wrapping",
      Algorithm::MonotoneChain => "Monotone Chain",
    }
  }

  /// # Errors
  /// Returns the partial hull if `token` is cancelled before the builder
  /// finishes.
  pub fn convex_hull<T>(self, points: Vec<Point<T>>, token: &CancelToken) -> Result<Hull<T>, Cancelled<T>>
  where
    T: HullScalar,
  {
    match self {
      Algorithm::GiftWrapping => gift_wrapping::convex_hull(points, token),
      Algorithm::MonotoneChain => monotone_chain::convex_hull(points, token),
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// How two hulls of the same input relate when their vertices are compared as
/// sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VertexAgreement<T> {
  Same,
  /// The vertex sets differ only by points that lie on the boundary of the
  /// other hull. Both hulls describe the same polygon.
  ///
  /// Neither builder in this crate emits a colinear middle vertex, so two of
  /// their hulls always compare as `Same` or `Different`. This case only
  /// arises when one side was built elsewhere, and such a hull with a colinear
  /// vertex fails [`verify`](crate::verification::verify) against its own
  /// vertices.
  CollinearTieBreak {
    first_only: Vec<Point<T>>,
    second_only: Vec<Point<T>>,
  },
  Different {
    first_only: Vec<Point<T>>,
    second_only: Vec<Point<T>>,
  },
}

impl<T> VertexAgreement<T> {
  /// Same polygon, possibly with different collinear vertices.
  pub fn is_same_polygon(&self) -> bool {
    !matches!(self, VertexAgreement::Different { .. })
  }
}

/// $O(h \log h)$ Compare vertex sets, ignoring start vertex and direction.
pub fn compare_vertex_sets<T>(first: &Hull<T>, second: &Hull<T>) -> VertexAgreement<T>
where
  T: HullScalar,
{
  let first_set = sorted_vertices(first);
  let second_set = sorted_vertices(second);
  let first_only = difference(&first_set, &second_set);
  let second_only = difference(&second_set, &first_set);
  if first_only.is_empty() && second_only.is_empty() {
    VertexAgreement::Same
  } else if first_only.iter().all(|pt| on_boundary(second, pt))
    && second_only.iter().all(|pt| on_boundary(first, pt))
  {
    VertexAgreement::CollinearTieBreak {
      first_only,
      second_only,
    }
  } else {
    VertexAgreement::Different {
      first_only,
      second_only,
    }
  }
}

fn sorted_vertices<T: HullScalar>(hull: &Hull<T>) -> Vec<Point<T>> {
  let mut vertices = hull.vertices().to_vec();
  vertices.sort_unstable_by(TotalOrd::total_cmp);
  vertices.dedup();
  vertices
}

// Both inputs are sorted and free of duplicates.
fn difference<T: HullScalar>(lhs: &[Point<T>], rhs: &[Point<T>]) -> Vec<Point<T>> {
  lhs
    .iter()
    .filter(|pt| rhs.binary_search_by(|other| other.total_cmp(pt)).is_err())
    .cloned()
    .collect()
}

fn on_boundary<T: HullScalar>(hull: &Hull<T>, pt: &Point<T>) -> bool {
  hull
    .edges()
    .any(|(start, end)| Orientation::new(start, end, pt).is_colinear() && within_bounds(start, end, pt))
}
