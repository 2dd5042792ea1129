pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{PlanformError, Result};
pub use geometry::{Outline, PathCommand, Shape};
pub use tessellation::{TessellationParams, TriangleMesh};
