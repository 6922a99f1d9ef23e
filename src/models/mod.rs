pub mod detection;
pub mod group;

pub use detection::*;
pub use group::*;
