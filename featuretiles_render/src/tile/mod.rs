mod coerce;
mod options;
mod policy;
mod renderer;
mod tile_source;

pub use coerce::*;
pub use options::*;
pub use policy::*;
pub use renderer::*;
pub use tile_source::*;
