#![allow(clippy::module_inception)]

mod cursor;
mod feature;
pub mod filter;
mod query;

pub use cursor::*;
pub use feature::*;
pub use query::*;
