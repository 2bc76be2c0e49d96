use crate::builder::KdTreeBuilder;
use crate::point::Point;
use crate::r#type::CoordNum;

/// A node of a built [`KdTree`].
///
/// Each node stores exactly one point and owns its children exclusively. The axis a node splits
/// on is implicit from its depth (`depth % K`) and is not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<N: CoordNum, const K: usize> {
    pub(crate) point: Point<N, K>,
    pub(crate) left: Option<Box<Node<N, K>>>,
    pub(crate) right: Option<Box<Node<N, K>>>,
}

impl<N: CoordNum, const K: usize> Node<N, K> {
    /// The point stored at this node.
    #[inline]
    pub fn point(&self) -> &Point<N, K> {
        &self.point
    }

    /// The child node holding the points at or below this node's coordinate on its split axis.
    pub fn left(&self) -> Option<&Node<N, K>> {
        self.left.as_deref()
    }

    /// The child node holding the points at or above this node's coordinate on its split axis.
    pub fn right(&self) -> Option<&Node<N, K>> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// An immutable k-d tree over points with `K` coordinates of type `N`.
///
/// Usually this will be created via a [`KdTreeBuilder`] or [`KdTree::from_points`]. Once built
/// the tree is never mutated, so it can be shared freely across readers.
#[derive(Debug, Clone, PartialEq)]
pub struct KdTree<N: CoordNum, const K: usize> {
    pub(crate) root: Option<Box<Node<N, K>>>,
    pub(crate) num_items: usize,
}

impl<N: CoordNum, const K: usize> KdTree<N, K> {
    /// Build a tree directly from a collection of points.
    pub fn from_points(points: impl IntoIterator<Item = impl Into<Point<N, K>>>) -> Self {
        points.into_iter().collect()
    }

    /// Access the root node for manual traversal. `None` when the tree is empty.
    pub fn root(&self) -> Option<&Node<N, K>> {
        self.root.as_deref()
    }

    /// The number of points in this tree.
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// Returns `true` if this tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }
}

impl<N: CoordNum, const K: usize, P: Into<Point<N, K>>> FromIterator<P> for KdTree<N, K> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut builder = KdTreeBuilder::with_capacity(iter.size_hint().0);
        for point in iter {
            builder.add(point);
        }
        builder.finish()
    }
}
