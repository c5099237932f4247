//! Operating system abstraction layer (Windows)
//!
//! `ProcessPrng` is the primary interface to the user-mode per-processor
//! PRNGs since Windows 10. It lives in `bcryptprimitives.dll`, which has no
//! import library, so the function is resolved at runtime once and the module
//! stays loaded for the lifetime of the process.

use std::mem;

use windows_sys::Win32::Foundation::{BOOL, FALSE};
use windows_sys::Win32::System::LibraryLoader::{
    GetProcAddress, LOAD_LIBRARY_SEARCH_SYSTEM32, LoadLibraryExW,
};

use super::EntropySource;
use crate::error::EntropyError;

type ProcessPrngFn = unsafe extern "system" fn(pbdata: *mut u8, cbdata: usize) -> BOOL;

/// Resolved `ProcessPrng` entry point.
#[derive(Debug)]
pub(crate) struct ProcessPrng {
    call: ProcessPrngFn,
}

impl EntropySource for ProcessPrng {
    fn open() -> Result<Self, EntropyError> {
        let dll: Vec<u16> = "bcryptprimitives.dll\0".encode_utf16().collect();

        let module = unsafe {
            LoadLibraryExW(dll.as_ptr(), std::ptr::null_mut(), LOAD_LIBRARY_SEARCH_SYSTEM32)
        };
        if module.is_null() {
            return Err(EntropyError::Unresolved("ProcessPrng"));
        }

        let proc = unsafe { GetProcAddress(module, b"ProcessPrng\0".as_ptr()) }
            .ok_or(EntropyError::Unresolved("ProcessPrng"))?;

        // SAFETY: `ProcessPrng` has exactly this signature, and the module is
        // never freed.
        let call = unsafe { mem::transmute::<unsafe extern "system" fn() -> isize, ProcessPrngFn>(proc) };

        tracing::debug!(backend = "ProcessPrng", "secure random source ready");

        Ok(Self { call })
    }

    fn next_word(&self) -> Result<u32, EntropyError> {
        let mut buf = [0u8; 4];

        let ok = unsafe { (self.call)(buf.as_mut_ptr(), buf.len()) };
        if ok == FALSE {
            return Err(EntropyError::ProcessPrngFailed);
        }

        Ok(u32::from_ne_bytes(buf))
    }
}
