#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod builder;
mod error;
mod index;
mod point;
mod query;
mod r#type;

pub use builder::KdTreeBuilder;
pub use error::KdNearestError;
pub use index::{KdTree, Node};
pub use point::Point;
pub use r#type::CoordNum;
