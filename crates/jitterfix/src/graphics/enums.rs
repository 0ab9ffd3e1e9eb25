/// Anti-aliasing technique reported by the graphics config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntiAliasingMode {
    Off,
    Fxaa,
    /// TSCMAA with camera jitter; the mode the jitter fix matters most for.
    TscmaaJitter,
    Tscmaa,
}

impl AntiAliasingMode {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Off,
            1 => Self::Fxaa,
            2 => Self::TscmaaJitter,
            3 => Self::Tscmaa,
            _ => Self::Off,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Fxaa => "FXAA",
            Self::TscmaaJitter => "TSCMAA + JITTER",
            Self::Tscmaa => "TSCMAA",
        }
    }
}

/// Upscaler selected by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpscalerKind {
    Fsr,
    Dlss,
}

impl UpscalerKind {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Fsr),
            2 => Some(Self::Dlss),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fsr => "FSR",
            Self::Dlss => "DLSS",
        }
    }
}
