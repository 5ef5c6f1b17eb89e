//! CLI command implementations

pub mod generate;
pub mod list;
pub mod play;
pub mod train;
