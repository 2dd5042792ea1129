mod outline;
mod shape;

pub use outline::{Outline, PathCommand};
pub use shape::Shape;
