mod bezier_wall;
mod lined_rectangle;
mod make_box;
mod stroke_polyline;

pub use bezier_wall::{wall_bezier_controls, BezierWallStyle, StrokeBezierWall};
pub use lined_rectangle::{LinedRectangle, StrokePlacement};
pub use make_box::MakeBox;
pub use stroke_polyline::StrokePolyline;
