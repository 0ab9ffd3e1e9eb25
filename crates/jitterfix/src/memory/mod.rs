mod access;
pub mod layout;
mod local;
#[cfg(target_os = "windows")]
mod module;

#[cfg(test)]
pub mod mock;

pub use access::ProcessMemory;
pub use local::LocalMemory;
#[cfg(target_os = "windows")]
pub use module::ModuleImage;

#[cfg(test)]
pub use mock::{MockMemoryBuilder, MockProcessMemory};
