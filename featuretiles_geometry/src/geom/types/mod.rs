mod coordinates;
mod line_string;
mod multi;
mod point_set;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use line_string::*;
pub use multi::*;
pub use point_set::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
