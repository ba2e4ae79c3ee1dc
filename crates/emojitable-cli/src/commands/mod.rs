//! CLI command implementations

pub mod generate;
pub mod lookup;
pub mod replace;
