//! A minimal `mmap`-backed runtime to execute emitted code.
//!
//! This turns an [`Encoder`](crate::encoder::Encoder)'s output into a
//! callable native function: map a page, copy the code in, flip it to
//! read-execute, and hand back a typed function pointer.

use core::ffi::c_void;
use nix::sys::mman::{mmap, mprotect, munmap, MapFlags, ProtFlags};

/// A single `mmap`ed page, writable until [`Runtime::make_executable`] is
/// called, then read-execute only.
pub struct Runtime {
    buf: *mut c_void,
    len: usize,
}

impl Runtime {
    /// Allocate a single page.
    pub fn new() -> Runtime {
        let len = core::num::NonZeroUsize::new(4096).unwrap();
        let buf = unsafe {
            mmap(
                None,
                len,
                ProtFlags::PROT_READ | ProtFlags::PROT_WRITE,
                MapFlags::MAP_PRIVATE | MapFlags::MAP_ANONYMOUS,
                0, /* fd */
                0, /* off */
            )
            .expect("failed to mmap Runtime code buffer")
        };

        Runtime {
            buf,
            len: len.get(),
        }
    }

    /// Address of the start of the mapped page; this is the `base` that
    /// [`Encoder::link_to`](crate::encoder::Encoder::link_to) resolves
    /// absolute relocations against.
    pub fn base(&self) -> u64 {
        self.buf as u64
    }

    /// The mapped page as a writable byte slice.
    ///
    /// # Safety
    ///
    /// The caller must not retain the slice past a call to
    /// [`Runtime::make_executable`], after which the page is read-execute
    /// only and writes fault.
    pub unsafe fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.buf.cast(), self.len) }
    }

    /// Remove write permissions from the page and mark it read-execute.
    ///
    /// # Safety
    ///
    /// The caller is responsible for having written well-formed machine
    /// code into the page before calling this.
    pub unsafe fn make_executable(&mut self) {
        unsafe {
            mprotect(self.buf, self.len, ProtFlags::PROT_READ | ProtFlags::PROT_EXEC)
                .expect("failed to mprotect Runtime code buffer RX");
        }
    }

    /// Reinterpret the block of code as `F`.
    ///
    /// # Safety
    ///
    /// The caller must ensure `F` matches the calling convention and
    /// signature of the code written into the page, and that
    /// [`Runtime::make_executable`] has already been called.
    pub unsafe fn as_fn<F>(&self) -> F {
        unsafe { std::mem::transmute_copy(&self.buf) }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        unsafe {
            munmap(self.buf, self.len).expect("failed to munmap Runtime");
        }
    }
}
