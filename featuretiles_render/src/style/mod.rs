#![allow(clippy::module_inception)]

mod catalog;
mod selector;
mod style;

pub use catalog::*;
pub use selector::*;
pub use style::*;
