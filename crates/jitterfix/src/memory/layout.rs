//! Memory layout constants for the game's graphics configuration structure.
//!
//! The layout is reverse-engineered: each constant is a byte offset from
//! the structure base reported by the resolved slot. Offsets must be
//! re-validated by hand after a client update; nothing at runtime can
//! detect a layout change.

/// Field offsets within the graphics configuration structure.
pub mod graphics {
    /// Camera jitter during GPose and NPC dialogue (0 or 1).
    pub const NPC_GPOSE_JITTER: u64 = 0x19;

    /// Camera jitter during cutscenes (0 or 1).
    pub const CUTSCENE_JITTER: u64 = 0x1A;

    /// Active anti-aliasing technique (0 = off, 1 = FXAA,
    /// 2 = TSCMAA + jitter, 3 = TSCMAA). Never written.
    pub const ANTI_ALIASING_MODE: u64 = 0x2C;

    /// Dynamic resolution toggle (0 or 1). Never written.
    pub const DYNAMIC_RESOLUTION: u64 = 0x44;

    /// Downsample buffer behavior; affects DoF/bloom buffers when an
    /// upscaler or dynamic resolution is running.
    pub const DOWNSCALE_BUFFERS: u64 = 0x45;

    /// Upscaler selector (1 = FSR, 2 = DLSS). Never written.
    pub const DLSS_FSR_SWITCH: u64 = 0x54;

    /// Scale applied to the jitter displacement (32-bit float).
    pub const JITTER_MULTIPLIER: u64 = 0x64;
}
