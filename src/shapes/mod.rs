mod bounds;
mod rectangle;

pub use bounds::Bounds;
pub use rectangle::Rectangle;
