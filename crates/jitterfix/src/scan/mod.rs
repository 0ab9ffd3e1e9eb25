//! Startup-only signature scanning and slot resolution.

mod resolver;
mod scanner;
mod signature;

pub use resolver::*;
pub use scanner::*;
pub use signature::*;
