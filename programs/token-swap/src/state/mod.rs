pub mod offer;

pub use offer::*;
