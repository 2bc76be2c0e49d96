use std::fmt::Debug;

use num_traits::Float;

/// A trait for numeric types that can be used as tree coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Queries compare squared
/// distances, so the coordinate type must be a floating-point scalar; integer coordinates should
/// be widened to `f32` or `f64` by the caller.
pub trait CoordNum: private::Sealed + Float + Debug + Send + Sync {}

impl CoordNum for f32 {}
impl CoordNum for f64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
