mod parse;
mod read;

pub use parse::*;
pub use read::*;
