//! Domain layer containing the entities signed into and read out of tokens.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
