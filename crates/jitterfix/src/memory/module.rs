use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::System::ProcessStatus::{GetModuleInformation, MODULEINFO};
use windows::Win32::System::Threading::GetCurrentProcess;

use crate::error::{Error, Result};

/// The host process's main module: base address and image size, the
/// region the startup signature scan runs over.
#[derive(Debug, Clone, Copy)]
pub struct ModuleImage {
    base: u64,
    size: usize,
}

impl ModuleImage {
    /// Query the main module of the current process.
    pub fn current_process() -> Result<Self> {
        unsafe {
            let module =
                GetModuleHandleW(None).map_err(|e| Error::ModuleQueryFailed(e.to_string()))?;

            let mut info = MODULEINFO::default();
            GetModuleInformation(
                GetCurrentProcess(),
                module,
                &mut info,
                std::mem::size_of::<MODULEINFO>() as u32,
            )
            .map_err(|e| Error::ModuleQueryFailed(e.to_string()))?;

            Ok(Self {
                base: info.lpBaseOfDll as usize as u64,
                size: info.SizeOfImage as usize,
            })
        }
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// View the module as a byte slice.
    ///
    /// # Safety
    ///
    /// The caller must only use the slice while the module stays loaded.
    /// For the current process's main module that is the process lifetime.
    pub unsafe fn bytes(&self) -> &'static [u8] {
        unsafe { std::slice::from_raw_parts(self.base as usize as *const u8, self.size) }
    }
}
