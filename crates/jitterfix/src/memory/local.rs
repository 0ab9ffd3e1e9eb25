use crate::error::{Error, Result};
use crate::memory::ProcessMemory;

/// In-process memory access through raw pointers.
///
/// The only `unsafe` in the crate lives here. Callers must only pass
/// addresses the host keeps mapped: the resolved slot (inside the module
/// image) and field addresses of a structure the host reported via a
/// non-zero slot value. The zero address is rejected; anything else is
/// trusted, which is the accepted risk of a reverse-engineered layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalMemory;

impl LocalMemory {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessMemory for LocalMemory {
    fn read(&self, address: u64, buf: &mut [u8]) -> Result<()> {
        if address == 0 {
            return Err(Error::MemoryReadFailed {
                address,
                message: "null address".to_string(),
            });
        }

        // Safety: address is non-zero and, per the capability contract,
        // points at `buf.len()` readable bytes of host memory.
        unsafe {
            std::ptr::copy_nonoverlapping(
                address as usize as *const u8,
                buf.as_mut_ptr(),
                buf.len(),
            );
        }
        Ok(())
    }

    fn write(&mut self, address: u64, bytes: &[u8]) -> Result<()> {
        if address == 0 {
            return Err(Error::MemoryWriteFailed {
                address,
                message: "null address".to_string(),
            });
        }

        // Safety: address is non-zero and points at `bytes.len()` writable
        // bytes of host memory per the capability contract.
        unsafe {
            std::ptr::copy_nonoverlapping(
                bytes.as_ptr(),
                address as usize as *mut u8,
                bytes.len(),
            );
        }
        Ok(())
    }
}
