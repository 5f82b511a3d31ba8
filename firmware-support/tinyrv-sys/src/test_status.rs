// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

/// Outcome of a test binary as observed by the bench.
///
/// The discriminants are part of the bench contract: the simulator polls the
/// status register and stops the bench once it reads a value other than
/// `Running`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum TestStatus {
    Running = 0,
    Success = 1,
    Fail = 2,
}

/// This is a wrapper type around the test status register of the bench. The
/// register holds a single [`TestStatus`] word at offset `0x00`.
#[derive(Clone)]
pub struct StatusRegister {
    base_addr: *mut u32,
}

impl StatusRegister {
    /// Create a new [`StatusRegister`] instance given a base address.
    ///
    /// # Safety
    ///
    /// The `base_addr` pointer MUST BE a valid pointer that is backed
    /// by the memory mapped status register of the bench.
    pub const unsafe fn new(base_addr: *const ()) -> StatusRegister {
        StatusRegister {
            base_addr: base_addr as *mut u32,
        }
    }

    pub fn set_status(&self, status: TestStatus) {
        unsafe {
            self.base_addr.write_volatile(status as u32);
        }
    }
}
