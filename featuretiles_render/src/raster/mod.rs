mod simple;

pub use simple::*;
