//! Per-tick enforcement of the graphics config fields.
//!
//! The enforcer is armed once at startup from a signature scan and then
//! re-run by the host's update callback every tick, for the lifetime of
//! the session. Each tick re-dereferences the slot, compares the fields of
//! interest against the desired values and writes only what drifted, so a
//! quiet tick costs a handful of reads and zero writes.

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::graphics::GraphicsConfig;
use crate::memory::ProcessMemory;
use crate::scan::{ResolvedSlot, graphics_config_signature, resolve_static_address};
use crate::settings::Settings;

/// The game disables jitter in cutscenes, GPose and NPC dialogue; both
/// jitter bytes are forced back to this whenever drift is observed.
const JITTER_ON: u8 = 1;

/// What a single enforcement tick corrected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Both jitter bytes were written back to 1.
    pub jitter_corrected: bool,
    pub multiplier_corrected: bool,
    pub downscale_corrected: bool,
}

impl TickOutcome {
    /// Number of field writes the tick performed. A jitter correction is
    /// two byte writes; the other corrections are one write each.
    pub fn write_count(&self) -> usize {
        let mut count = 0;
        if self.jitter_corrected {
            count += 2;
        }
        if self.multiplier_corrected {
            count += 1;
        }
        if self.downscale_corrected {
            count += 1;
        }
        count
    }

    pub fn corrected_anything(&self) -> bool {
        self.write_count() > 0
    }
}

/// Attach-once, tick-forever corrector for the graphics config.
///
/// A missed scan arms the enforcer with the null slot: every later tick is
/// a no-op and nothing is surfaced to the caller. The tick itself is total;
/// a zero slot, a zero structure base or a failed capability access all
/// degrade to "nothing corrected this tick". The next tick is the retry.
#[derive(Debug, Clone, Copy)]
pub struct JitterEnforcer {
    slot: ResolvedSlot,
}

impl JitterEnforcer {
    /// Scan the host module image and resolve the config pointer slot.
    ///
    /// Runs once per process lifetime. A scan miss is reported with a
    /// single `warn!` and leaves the enforcer permanently disarmed; the
    /// image does not change without a client restart, so there is nothing
    /// to retry.
    pub fn attach(image: &[u8], image_base: u64) -> Self {
        match resolve_static_address(image, image_base, &graphics_config_signature()) {
            Ok(slot) => {
                debug!("Graphics config slot resolved at {:#x}", slot.addr());
                Self { slot }
            }
            Err(e) => {
                warn!("Graphics config scan failed, enforcement disabled: {}", e);
                Self {
                    slot: ResolvedSlot::NULL,
                }
            }
        }
    }

    /// Attach by scanning the current process's main module.
    #[cfg(target_os = "windows")]
    pub fn attach_to_host() -> Self {
        match crate::memory::ModuleImage::current_process() {
            Ok(module) => {
                // Safety: the main module stays mapped for the process lifetime.
                let image = unsafe { module.bytes() };
                Self::attach(image, module.base())
            }
            Err(e) => {
                warn!("Host module query failed, enforcement disabled: {}", e);
                Self {
                    slot: ResolvedSlot::NULL,
                }
            }
        }
    }

    /// Build from an already-resolved slot.
    pub fn with_slot(slot: ResolvedSlot) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> ResolvedSlot {
        self.slot
    }

    /// Whether the startup scan found the slot. An armed enforcer can
    /// still no-op every tick while the host has not populated the slot.
    pub fn is_armed(&self) -> bool {
        !self.slot.is_null()
    }

    /// Run one enforcement pass. Called by the host's update callback;
    /// never blocks, never allocates, never fails.
    pub fn tick<M: ProcessMemory>(&self, mem: &mut M, settings: Settings) -> TickOutcome {
        match self.run_tick(mem, settings) {
            Ok(outcome) => outcome,
            Err(e) => {
                trace!("Enforcement tick skipped: {}", e);
                TickOutcome::default()
            }
        }
    }

    fn run_tick<M: ProcessMemory>(&self, mem: &mut M, settings: Settings) -> Result<TickOutcome> {
        let mut outcome = TickOutcome::default();

        if self.slot.is_null() {
            return Ok(outcome);
        }

        // The host may not have created the structure yet this session, or
        // may have torn it down; zero means skip, not error.
        let live_base = mem.read_u64(self.slot.addr())?;
        let Some(config) = GraphicsConfig::new(live_base) else {
            return Ok(outcome);
        };

        let desired = settings.desired_state();

        let npc_gpose = config.npc_gpose_jitter(mem)?;
        let cutscene = config.cutscene_jitter(mem)?;
        if npc_gpose != JITTER_ON || cutscene != JITTER_ON {
            config.set_npc_gpose_jitter(mem, JITTER_ON)?;
            config.set_cutscene_jitter(mem, JITTER_ON)?;
            trace!(
                "Jitter drift corrected: npc_gpose {} / cutscene {} -> {} / {}",
                npc_gpose, cutscene, JITTER_ON, JITTER_ON
            );
            outcome.jitter_corrected = true;
        }

        // Exact comparison: the host never perturbs this field on its own,
        // so any difference is a real change worth writing back.
        let multiplier = config.jitter_multiplier(mem)?;
        if multiplier != desired.jitter_multiplier {
            config.set_jitter_multiplier(mem, desired.jitter_multiplier)?;
            trace!(
                "Jitter multiplier drift corrected: {} -> {}",
                multiplier, desired.jitter_multiplier
            );
            outcome.multiplier_corrected = true;
        }

        if let Some(value) = desired.downscale_buffers {
            let current = config.downscale_buffers(mem)?;
            if current != value {
                config.set_downscale_buffers(mem, value)?;
                trace!("Downscale buffers drift corrected: {} -> {}", current, value);
                outcome.downscale_corrected = true;
            }
        }

        Ok(outcome)
    }
}
