//! Domain entities and constrained value types.

pub mod category;
pub mod types;
pub mod video;
