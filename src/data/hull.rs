use std::ops::Deref;

use super::Point;
use crate::verification::{self, HullInvalid};
use crate::HullScalar;

/// Vertices of a convex hull in counter-clockwise order.
///
/// The last vertex implicitly connects back to the first. Hulls of fewer than
/// three vertices are legal: they describe empty input, a single point, or a
/// segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hull<T> {
  vertices: Vec<Point<T>>,
}

impl<T> Hull<T> {
  /// $O(1)$ Assume that the vertices form a convex hull.
  ///
  /// Use [`Hull::verify`] to check the claim against a point set.
  pub fn new_unchecked(vertices: Vec<Point<T>>) -> Hull<T> {
    Hull { vertices }
  }

  pub fn vertices(&self) -> &[Point<T>] {
    &self.vertices
  }

  pub fn into_vec(self) -> Vec<Point<T>> {
    self.vertices
  }

  /// Cyclic edges. A hull with a single vertex has no edges.
  pub fn edges(&self) -> impl Iterator<Item = (&Point<T>, &Point<T>)> + '_ {
    let n = if self.vertices.len() < 2 {
      0
    } else {
      self.vertices.len()
    };
    (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
  }

  /// $O(n h)$ Check that no point lies outside the hull and that the hull is
  /// convex. See [`verification::verify`].
  pub fn verify(&self, points: &[Point<T>]) -> Result<(), HullInvalid>
  where
    T: HullScalar,
  {
    verification::verify(points, &self.vertices)
  }
}

impl<T> Deref for Hull<T> {
  type Target = [Point<T>];
  fn deref(&self) -> &[Point<T>] {
    &self.vertices
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.vertices
  }
}

impl<T> IntoIterator for Hull<T> {
  type Item = Point<T>;
  type IntoIter = std::vec::IntoIter<Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}
