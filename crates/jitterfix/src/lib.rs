//! # jitterfix
//!
//! Core library for a camera-jitter fix that patches the game client's
//! graphics configuration in place.
//!
//! This crate provides:
//! - Wildcard signature scanning over the host module image
//! - RIP-relative decoding of the static graphics config pointer slot
//! - A typed, offset-based view over the reverse-engineered structure
//! - A per-tick enforcement loop that corrects only observed drift
//!
//! The surrounding plugin shell (settings UI, chat command, config
//! persistence) is a separate concern: it hands a [`Settings`] snapshot to
//! [`JitterEnforcer::tick`] from the host's update callback and subscribes
//! to `tracing` for diagnostics.
//!
//! ## Example
//!
//! ```ignore
//! use jitterfix::{JitterEnforcer, LocalMemory, Settings};
//!
//! // At plugin startup, scan the host module once.
//! let enforcer = JitterEnforcer::attach_to_host();
//! let mut mem = LocalMemory::new();
//! let settings = Settings::default();
//!
//! // From the host's per-frame update callback:
//! enforcer.tick(&mut mem, settings);
//! ```

pub mod enforce;
pub mod error;
pub mod graphics;
pub mod memory;
pub mod scan;
pub mod settings;

pub use enforce::{JitterEnforcer, TickOutcome};
pub use error::{Error, Result};
pub use graphics::{AntiAliasingMode, GraphicsConfig, UpscalerKind};
#[cfg(target_os = "windows")]
pub use memory::ModuleImage;
pub use memory::{LocalMemory, ProcessMemory};
pub use scan::{
    CodeSignature, ResolvedSlot, find_pattern, format_pattern, graphics_config_signature,
    parse_pattern, resolve_static_address,
};
pub use settings::{DesiredState, Settings};
