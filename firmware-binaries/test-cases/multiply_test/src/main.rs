#![no_std]
#![cfg_attr(not(test), no_main)]

// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use ufmt::uwriteln;

use log::{info, LevelFilter};
use tinyrv_sys::console::log::LOGGER;
use tinyrv_sys::console::Console;
use tinyrv_sys::multiply;
use tinyrv_sys::multiply::self_test::self_test;
use tinyrv_sys::result_regs::ResultRegisters;
use tinyrv_sys::test_status::{StatusRegister, TestStatus};

#[cfg(not(test))]
use riscv_rt::entry;

const CONSOLE_ADDR: *const () = (0b001 << 29) as *const ();
const STATUS_ADDR: *const () = (0b010 << 29) as *const ();
const RESULT_ADDR: *const () = (0b011 << 29) as *const ();

#[allow(static_mut_refs)]
#[cfg_attr(not(test), entry)]
fn main() -> ! {
    // Initialize peripherals.
    let mut console = unsafe { Console::new(CONSOLE_ADDR) };
    let status = unsafe { StatusRegister::new(STATUS_ADDR) };
    let regs = unsafe { ResultRegisters::new(RESULT_ADDR) };

    unsafe {
        LOGGER.set_logger(console.clone());
        LOGGER.display_source = LevelFilter::Info;
        log::set_logger_racy(&LOGGER).ok();
        log::set_max_level_racy(LevelFilter::Info);
    }

    info!(
        "multiply smoke test, seeds {} and {}",
        multiply::SEED_A,
        multiply::SEED_B
    );

    uwriteln!(console, "Start multiply self test").unwrap();
    let mut failures = 0;
    for (name, result) in self_test(regs.clone()) {
        match result {
            None => uwriteln!(console, "{}: OK", name).unwrap(),
            Some(msg) => {
                failures += 1;
                uwriteln!(console, "{}: FAIL: {}", name, msg).unwrap();
            }
        }
    }

    // Leave the canonical products behind for the register inspector.
    multiply::run_chain(&regs, multiply::SEED_A, multiply::SEED_B);

    if failures == 0 {
        uwriteln!(console, "RESULT: OK").unwrap();
        status.set_status(TestStatus::Success);
    } else {
        uwriteln!(console, "RESULT: FAIL").unwrap();
        status.set_status(TestStatus::Fail);
    }

    loop {
        continue;
    }
}

#[panic_handler]
fn panic_handler(info: &core::panic::PanicInfo) -> ! {
    use core::fmt::Write;

    let mut console = unsafe { Console::new(CONSOLE_ADDR) };
    let status = unsafe { StatusRegister::new(STATUS_ADDR) };

    let _ = writeln!(console, "{}", info);
    status.set_status(TestStatus::Fail);

    loop {
        continue;
    }
}
