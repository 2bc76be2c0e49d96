//! Single nearest-neighbor search over a built [`KdTree`].

use geo_traits::CoordTrait;

use crate::index::{KdTree, Node};
use crate::point::Point;
use crate::r#type::CoordNum;

impl<N: CoordNum, const K: usize> KdTree<N, K> {
    /// Search the index for the stored point closest to `target`.
    ///
    /// Distance is Euclidean. Returns `None` only when the tree is empty. When several stored
    /// points are equidistant from `target`, the one encountered first in traversal order wins;
    /// which one that is depends on the tree layout, not on coordinate order.
    pub fn nearest(&self, target: impl Into<Point<N, K>>) -> Option<Point<N, K>> {
        self.nearest_with_distance(target).map(|(point, _)| point)
    }

    /// Search the index for the stored point closest to `target`, along with its squared
    /// Euclidean distance to `target`.
    pub fn nearest_with_distance(
        &self,
        target: impl Into<Point<N, K>>,
    ) -> Option<(Point<N, K>, N)> {
        let target = target.into();
        let mut best: Option<(Point<N, K>, N)> = None;
        nearest_in(self.root.as_deref(), &target, 0, &mut best);
        best
    }
}

impl<N: CoordNum> KdTree<N, 2> {
    /// Search the index for the stored point closest to a query coordinate.
    pub fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> Option<Point<N, 2>> {
        self.nearest([coord.x(), coord.y()])
    }
}

/// Recursive descent with backtracking, carrying the best candidate seen so far.
///
/// The near half (the side of the splitting plane the target falls on) is searched first so the
/// best distance tightens before the pruning test runs on the far half. The far half is entered
/// only when the squared gap to the splitting plane is still below the best squared distance;
/// otherwise no point behind the plane can beat the current best. Both comparisons use squared
/// distance; mixing squared and unsquared values here breaks the pruning bound.
fn nearest_in<N: CoordNum, const K: usize>(
    node: Option<&Node<N, K>>,
    target: &Point<N, K>,
    depth: usize,
    best: &mut Option<(Point<N, K>, N)>,
) {
    let Some(node) = node else {
        return;
    };

    let sq_dist = target.sq_dist(&node.point);
    match best {
        Some((_, best_dist)) if *best_dist <= sq_dist => {}
        _ => *best = Some((node.point, sq_dist)),
    }

    let axis = depth % K;
    let target_value = target.coord(axis);
    let node_value = node.point.coord(axis);

    let (near, far) = if target_value < node_value {
        (node.left.as_deref(), node.right.as_deref())
    } else {
        (node.right.as_deref(), node.left.as_deref())
    };

    nearest_in(near, target, depth + 1, best);

    let axis_gap = target_value - node_value;
    let within_best = match best {
        Some((_, best_dist)) => axis_gap * axis_gap < *best_dist,
        None => true,
    };
    if within_best {
        nearest_in(far, target, depth + 1, best);
    }
}
