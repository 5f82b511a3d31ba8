#![no_std]
#![cfg_attr(not(test), no_main)]

// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use core::fmt::Write;

use heapless::String;
use ufmt::uwriteln;

use tinyrv_sys::console::Console;
use tinyrv_sys::test_status::{StatusRegister, TestStatus};

#[cfg(not(test))]
use riscv_rt::entry;

const CONSOLE_ADDR: *const () = (0b001 << 29) as *const ();
const STATUS_ADDR: *const () = (0b010 << 29) as *const ();

#[cfg_attr(not(test), entry)]
fn main() -> ! {
    let mut console = unsafe { Console::new(CONSOLE_ADDR) };
    let status = unsafe { StatusRegister::new(STATUS_ADDR) };

    let names = ["Rust", "RISC-V", "tinyrv"];
    for name in names {
        uwriteln!(console, "Hello from {}!", name).unwrap();
    }

    // Format into a fixed buffer first to exercise data memory as well.
    let answer = 42;
    let mut s = String::<32>::new();
    let _ = writeln!(s, "The answer is {answer}");
    for b in s.bytes() {
        console.send(b);
    }

    status.set_status(TestStatus::Success);

    loop {
        continue;
    }
}

#[panic_handler]
fn panic_handler(info: &core::panic::PanicInfo) -> ! {
    let mut console = unsafe { Console::new(CONSOLE_ADDR) };
    let status = unsafe { StatusRegister::new(STATUS_ADDR) };

    let _ = writeln!(console, "{}", info);
    status.set_status(TestStatus::Fail);

    loop {
        continue;
    }
}
