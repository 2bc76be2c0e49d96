use std::cmp::Ordering;

use geo_traits::CoordTrait;

use crate::index::{KdTree, Node};
use crate::point::Point;
use crate::r#type::CoordNum;

/// A builder to create a [`KdTree`].
///
/// Points are buffered as they are added; [`finish`][KdTreeBuilder::finish] performs the
/// recursive median partition and produces the immutable tree.
#[derive(Debug, Clone)]
pub struct KdTreeBuilder<N: CoordNum, const K: usize> {
    points: Vec<Point<N, K>>,
}

impl<N: CoordNum, const K: usize> KdTreeBuilder<N, K> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a new builder with room for the provided number of points.
    pub fn with_capacity(num_items: usize) -> Self {
        Self {
            points: Vec::with_capacity(num_items),
        }
    }

    /// Add a point to the index.
    ///
    /// Returns the insertion index of this point. Duplicate coordinates are allowed; every added
    /// point is stored, each exactly once.
    pub fn add(&mut self, point: impl Into<Point<N, K>>) -> usize {
        let index = self.points.len();
        self.points.push(point.into());
        index
    }

    /// Consume this builder, performing the k-d sort and generating a [`KdTree`] ready for
    /// queries.
    pub fn finish(self) -> KdTree<N, K> {
        let num_items = self.points.len();
        let root = build_subtree(self.points, 0);
        KdTree { root, num_items }
    }
}

impl<N: CoordNum> KdTreeBuilder<N, 2> {
    /// Add a point to the index from anything implementing [`CoordTrait`].
    ///
    /// Returns the insertion index of this point.
    pub fn add_coord(&mut self, coord: &impl CoordTrait<T = N>) -> usize {
        self.add([coord.x(), coord.y()])
    }
}

impl<N: CoordNum, const K: usize> Default for KdTreeBuilder<N, K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursively partition `points` around the median of the axis for `depth`.
///
/// The axis cycles with depth (`depth % K`) and is recomputed the same way during queries; it is
/// never stored on the node. The sort is stable, so points with equal coordinates keep their
/// insertion order and the built tree is deterministic for a given input order.
fn build_subtree<N: CoordNum, const K: usize>(
    mut points: Vec<Point<N, K>>,
    depth: usize,
) -> Option<Box<Node<N, K>>> {
    if points.is_empty() {
        return None;
    }

    let axis = depth % K;
    points.sort_by(|a, b| {
        a.coord(axis)
            .partial_cmp(&b.coord(axis))
            .unwrap_or(Ordering::Equal)
    });

    // middle index; everything before it goes left, everything after it goes right
    let median = points.len() / 2;
    let point = points[median];
    let right = points.split_off(median + 1);
    points.truncate(median);

    Some(Box::new(Node {
        point,
        left: build_subtree(points, depth + 1),
        right: build_subtree(right, depth + 1),
    }))
}
