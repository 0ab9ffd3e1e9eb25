use crate::error::Result;
use crate::graphics::{AntiAliasingMode, UpscalerKind};
use crate::memory::ProcessMemory;
use crate::memory::layout::graphics;

/// Typed, offset-based view over the game's graphics config structure.
///
/// The structure is foreign memory owned entirely by the host. The view
/// holds only a base address for the current tick and must not be cached
/// across ticks: the host may reallocate the structure at any time, so the
/// slot is re-dereferenced and a fresh view built on every tick.
///
/// There is no identity check beyond the offset contract. If the host's
/// layout shifts after an update, these accessors read the wrong bytes;
/// that requires re-validating `memory::layout::graphics` by hand.
#[derive(Debug, Clone, Copy)]
pub struct GraphicsConfig {
    base: u64,
}

impl GraphicsConfig {
    /// Wrap a structure base address, or `None` for the zero address the
    /// host reports until the structure exists this session.
    pub fn new(base: u64) -> Option<Self> {
        if base == 0 { None } else { Some(Self { base }) }
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn npc_gpose_jitter<M: ProcessMemory>(&self, mem: &M) -> Result<u8> {
        mem.read_u8(self.base + graphics::NPC_GPOSE_JITTER)
    }

    pub fn set_npc_gpose_jitter<M: ProcessMemory>(&self, mem: &mut M, value: u8) -> Result<()> {
        mem.write_u8(self.base + graphics::NPC_GPOSE_JITTER, value)
    }

    pub fn cutscene_jitter<M: ProcessMemory>(&self, mem: &M) -> Result<u8> {
        mem.read_u8(self.base + graphics::CUTSCENE_JITTER)
    }

    pub fn set_cutscene_jitter<M: ProcessMemory>(&self, mem: &mut M, value: u8) -> Result<()> {
        mem.write_u8(self.base + graphics::CUTSCENE_JITTER, value)
    }

    /// Observation only; the enforcement loop never writes this field.
    pub fn anti_aliasing_mode<M: ProcessMemory>(&self, mem: &M) -> Result<AntiAliasingMode> {
        let raw = mem.read_u8(self.base + graphics::ANTI_ALIASING_MODE)?;
        Ok(AntiAliasingMode::from_u8(raw))
    }

    /// Observation only; the enforcement loop never writes this field.
    pub fn dynamic_resolution<M: ProcessMemory>(&self, mem: &M) -> Result<bool> {
        Ok(mem.read_u8(self.base + graphics::DYNAMIC_RESOLUTION)? != 0)
    }

    pub fn downscale_buffers<M: ProcessMemory>(&self, mem: &M) -> Result<u8> {
        mem.read_u8(self.base + graphics::DOWNSCALE_BUFFERS)
    }

    pub fn set_downscale_buffers<M: ProcessMemory>(&self, mem: &mut M, value: u8) -> Result<()> {
        mem.write_u8(self.base + graphics::DOWNSCALE_BUFFERS, value)
    }

    /// Observation only; the enforcement loop never writes this field.
    pub fn upscaler<M: ProcessMemory>(&self, mem: &M) -> Result<Option<UpscalerKind>> {
        let raw = mem.read_u8(self.base + graphics::DLSS_FSR_SWITCH)?;
        Ok(UpscalerKind::from_u8(raw))
    }

    pub fn jitter_multiplier<M: ProcessMemory>(&self, mem: &M) -> Result<f32> {
        mem.read_f32(self.base + graphics::JITTER_MULTIPLIER)
    }

    pub fn set_jitter_multiplier<M: ProcessMemory>(&self, mem: &mut M, value: f32) -> Result<()> {
        mem.write_f32(self.base + graphics::JITTER_MULTIPLIER, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MockMemoryBuilder;

    #[test]
    fn test_zero_base_is_rejected() {
        assert!(GraphicsConfig::new(0).is_none());
        assert!(GraphicsConfig::new(0x5000).is_some());
    }

    #[test]
    fn test_accessors_use_documented_offsets() {
        let mut bytes = vec![0u8; 0x70];
        bytes[0x19] = 1;
        bytes[0x1A] = 0;
        bytes[0x2C] = 2;
        bytes[0x44] = 1;
        bytes[0x45] = 1;
        bytes[0x54] = 2;
        bytes[0x64..0x68].copy_from_slice(&0.6f32.to_le_bytes());
        let mem = MockMemoryBuilder::new().region(0x5000, bytes).build();

        let config = GraphicsConfig::new(0x5000).unwrap();
        assert_eq!(config.npc_gpose_jitter(&mem).unwrap(), 1);
        assert_eq!(config.cutscene_jitter(&mem).unwrap(), 0);
        assert_eq!(
            config.anti_aliasing_mode(&mem).unwrap(),
            AntiAliasingMode::TscmaaJitter
        );
        assert!(config.dynamic_resolution(&mem).unwrap());
        assert_eq!(config.downscale_buffers(&mem).unwrap(), 1);
        assert_eq!(config.upscaler(&mem).unwrap(), Some(UpscalerKind::Dlss));
        assert_eq!(config.jitter_multiplier(&mem).unwrap(), 0.6);
    }

    #[test]
    fn test_writers_touch_only_their_field() {
        let mut mem = MockMemoryBuilder::new()
            .region(0x5000, vec![0u8; 0x70])
            .build();
        let config = GraphicsConfig::new(0x5000).unwrap();

        config.set_cutscene_jitter(&mut mem, 1).unwrap();
        config.set_jitter_multiplier(&mut mem, 0.6).unwrap();

        assert_eq!(mem.writes(), &[(0x501A, 1), (0x5064, 4)]);
        assert_eq!(mem.u8_at(0x5019), 0);
    }
}
