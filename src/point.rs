use geo_traits::CoordTrait;

use crate::error::{KdNearestError, Result};
use crate::r#type::CoordNum;

/// An immutable point with `K` coordinates of type `N`.
///
/// `K` is fixed at the type level, so points of different dimensions cannot be mixed within one
/// tree. The only runtime seam where a width mismatch can arise is [`Point::from_slice`], which
/// reports it as an error instead of truncating or padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<N: CoordNum, const K: usize>([N; K]);

impl<N: CoordNum, const K: usize> Point<N, K> {
    /// Create a new point from its coordinate array.
    pub fn new(coords: [N; K]) -> Self {
        Self(coords)
    }

    /// Create a new point from a coordinate slice, validating its width.
    pub fn from_slice(coords: &[N]) -> Result<Self> {
        let coords: [N; K] =
            coords
                .try_into()
                .map_err(|_| KdNearestError::DimensionMismatch {
                    expected: K,
                    actual: coords.len(),
                })?;
        Ok(Self(coords))
    }

    /// The coordinate of this point along `axis`.
    ///
    /// Panics if `axis >= K`.
    #[inline]
    pub fn coord(&self, axis: usize) -> N {
        self.0[axis]
    }

    /// The underlying coordinate array.
    pub fn coords(&self) -> &[N; K] {
        &self.0
    }

    /// The squared Euclidean distance between this point and `other`.
    ///
    /// Squared distance orders candidates identically to true Euclidean distance and avoids a
    /// square root per comparison; the query engine uses it for both the best-candidate
    /// comparison and the branch-pruning test.
    #[inline]
    pub fn sq_dist(&self, other: &Self) -> N {
        let mut acc = N::zero();
        for axis in 0..K {
            let delta = self.0[axis] - other.0[axis];
            acc = acc + delta * delta;
        }
        acc
    }
}

impl<N: CoordNum, const K: usize> From<[N; K]> for Point<N, K> {
    fn from(coords: [N; K]) -> Self {
        Self(coords)
    }
}

impl<N: CoordNum> CoordTrait for Point<N, 2> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.0[0]
    }

    fn y(&self) -> Self::T {
        self.0[1]
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.0[0],
            1 => self.0[1],
            _ => panic!("Invalid index of coord"),
        }
    }
}
