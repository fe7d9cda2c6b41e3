mod factory;
mod geojson;
mod memory;
mod options;
mod profile;
mod traits;

pub use factory::*;
pub use geojson::*;
pub use memory::*;
pub use options::*;
pub use profile::*;
pub use traits::*;
