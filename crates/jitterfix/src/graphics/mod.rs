mod config;
mod enums;

pub use config::*;
pub use enums::*;
