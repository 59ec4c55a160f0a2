mod shapes;

pub use shapes::{Bounds, Rectangle};
