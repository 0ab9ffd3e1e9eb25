use serde::{Deserialize, Serialize};

/// User-facing settings consumed by the enforcement loop.
///
/// Owned, edited and persisted by the surrounding configuration surface;
/// the loop only receives a by-value copy once per tick, which is the
/// consistent snapshot the tick works from even while a UI mutates the
/// source concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Scale applied to the jitter displacement.
    pub jitter_multiplier: f32,
    /// Whether the loop is allowed to touch the downscale buffers field.
    pub set_downscale_buffers: bool,
    /// Value to force when the override above is enabled.
    pub downscale_buffers: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            jitter_multiplier: 0.6,
            set_downscale_buffers: false,
            downscale_buffers: 0,
        }
    }
}

impl Settings {
    /// Derive the field values a tick should enforce. Pure function of the
    /// snapshot; `downscale_buffers` is `None` when the override is off and
    /// the field must not be written.
    pub fn desired_state(&self) -> DesiredState {
        DesiredState {
            jitter_multiplier: self.jitter_multiplier,
            downscale_buffers: if self.set_downscale_buffers {
                Some(self.downscale_buffers)
            } else {
                None
            },
        }
    }
}

/// Target field values for one enforcement tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesiredState {
    pub jitter_multiplier: f32,
    pub downscale_buffers: Option<u8>,
}
