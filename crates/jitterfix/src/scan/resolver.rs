use crate::error::{Error, Result};
use crate::scan::{CodeSignature, find_pattern};

/// Address of the static slot holding the live graphics config pointer.
///
/// Established once per process lifetime. The zero address is a legal
/// value meaning the scan missed; every consumer must treat it as
/// "nothing to enforce", not as an error. The slot is a weak reference:
/// it must be re-dereferenced every tick, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSlot(u64);

impl ResolvedSlot {
    pub const NULL: Self = Self(0);

    pub fn new(address: u64) -> Self {
        Self(address)
    }

    pub fn addr(self) -> u64 {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// Resolve a code signature to the static address it references.
///
/// The matched instruction stores through a RIP-relative disp32; the
/// referenced address is the instruction's end plus the displacement.
/// Deterministic and pure: same image and signature, same slot.
pub fn resolve_static_address(
    image: &[u8],
    image_base: u64,
    signature: &CodeSignature,
) -> Result<ResolvedSlot> {
    let pattern = signature.pattern_bytes()?;
    let offset = find_pattern(image, &pattern)
        .ok_or_else(|| Error::SignatureNotFound(signature.pattern.clone()))?;

    let instr = offset + signature.instr_offset;
    let disp_at = instr + signature.disp_offset;
    if disp_at + 4 > image.len() {
        return Err(Error::InvalidSignature(format!(
            "Displacement field at {:#x} runs past the module image",
            disp_at
        )));
    }

    let disp = i32::from_le_bytes([
        image[disp_at],
        image[disp_at + 1],
        image[disp_at + 2],
        image[disp_at + 3],
    ]);
    let next_ip = image_base + (instr + signature.instr_len) as u64;

    Ok(ResolvedSlot::new(next_ip.wrapping_add_signed(disp as i64)))
}
