use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A code signature: a wildcard byte pattern plus the location of the
/// RIP-relative displacement inside the matched instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSignature {
    pub pattern: String,
    /// Start of the referencing instruction within the matched window.
    pub instr_offset: usize,
    /// Position of the disp32 field within that instruction.
    pub disp_offset: usize,
    /// Instruction length; the displacement is relative to the next instruction.
    pub instr_len: usize,
}

impl CodeSignature {
    pub fn pattern_bytes(&self) -> Result<Vec<Option<u8>>> {
        parse_pattern(&self.pattern)
    }
}

/// Signature of the instruction that stores the graphics config pointer
/// into its static slot (`mov [rip+disp32], rax`: disp32 at byte 3, 7 bytes
/// total). Build-time constant; the game image does not change without a
/// client restart.
pub fn graphics_config_signature() -> CodeSignature {
    CodeSignature {
        pattern: "48 89 05 ?? ?? ?? ?? E8 ?? ?? ?? ?? 48 8D 8F ?? ?? ?? ??".to_string(),
        instr_offset: 0,
        disp_offset: 3,
        instr_len: 7,
    }
}

pub fn parse_pattern(pattern: &str) -> Result<Vec<Option<u8>>> {
    let mut bytes = Vec::new();
    for token in pattern.split_whitespace() {
        if token == "??" || token == "?" {
            bytes.push(None);
            continue;
        }

        let value = u8::from_str_radix(token, 16).map_err(|e| {
            Error::InvalidSignature(format!("Invalid signature token '{}': {}", token, e))
        })?;
        bytes.push(Some(value));
    }

    if bytes.is_empty() {
        return Err(Error::InvalidSignature(
            "Signature pattern is empty".to_string(),
        ));
    }

    Ok(bytes)
}

pub fn format_pattern(bytes: &[Option<u8>]) -> String {
    bytes
        .iter()
        .map(|b| match b {
            Some(value) => format!("{:02X}", value),
            None => "??".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
