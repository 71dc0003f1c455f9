mod hull;
pub(crate) mod point;

pub use hull::Hull;
pub use point::Point;
