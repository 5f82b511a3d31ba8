// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

pub mod log;

#[derive(Clone)]
/// `Console` is a structure representing the byte-wide debug output port of
/// the tinyrv test bench.
pub struct Console {
    /// `data_addr` is a mutable pointer to the data port of the console.
    data_addr: *mut u8,
}

impl Console {
    /// Create a new [`Console`] instance given a base address.
    ///
    /// # Safety
    ///
    /// The `base_addr` pointer MUST BE a valid pointer that is backed
    /// by a memory mapped console instance.
    pub const unsafe fn new(base_addr: *const ()) -> Console {
        Console {
            data_addr: base_addr as *mut u8,
        }
    }

    /// The `send` function writes a single byte to the output port. The port
    /// accepts a byte every cycle, so there is no ready flag to poll.
    pub fn send(&self, data: u8) {
        unsafe {
            self.data_addr.write_volatile(data);
        }
    }
}

impl ufmt::uWrite for Console {
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for b in s.bytes() {
            self.send(b);
        }
        Ok(())
    }

    type Error = ();
}

impl core::fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.bytes() {
            self.send(b);
        }
        Ok(())
    }
}
