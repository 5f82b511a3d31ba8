// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
use crate::console;

// The logger utilizes core::fmt to format the log messages because ufmt formatting is not
// compatible with (dependencies of) the log crate.
use core::fmt::Write;
use log::LevelFilter;

/// A global logger instance to be used with the `log` crate.
///
/// Use `set_logger` to set the `Console` instance to be used for logging.
/// # Safety
/// Using this logger is only safe if there is only one thread of execution.
/// Even though `ConsoleLogger` is `Send` and `Sync`, the underlying `Console` is not `Send` or `Sync`.
pub static mut LOGGER: ConsoleLogger = ConsoleLogger {
    console: None,
    display_level: LevelFilter::Trace,
    display_source: LevelFilter::Trace,
};

/// Wrapper for `Console` to be used as a logger with the `log` crate
/// Instead of making a new logger, use the `set_logger` method of the `LOGGER` instance.
/// # Safety
/// Using this logger is only safe if there is only one thread of execution.
/// Even though `ConsoleLogger` is `Send` and `Sync`, the underlying `Console` is not `Send` or `Sync`.
pub struct ConsoleLogger {
    console: Option<console::Console>,
    pub display_level: LevelFilter,
    pub display_source: LevelFilter,
}

impl ConsoleLogger {
    /// Set the logger to use the given console.
    /// # Safety
    /// Using this function and logger is only safe if there is only one thread of execution.
    /// This function is used to assign the `Console` instance to a global (`static mut`), but `Console` is not `Send` or `Sync`.
    pub unsafe fn set_logger(&mut self, console: console::Console) {
        self.console = Some(console);
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Level::Info <= metadata.level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            unsafe {
                match &mut (*core::ptr::addr_of_mut!(LOGGER)).console {
                    Some(c) => {
                        if record.level() <= self.display_level {
                            write!(c, "{} | ", record.level()).unwrap()
                        }
                        if record.level() <= self.display_source {
                            write!(
                                c,
                                "{}:{} - ",
                                record.file().unwrap(),
                                record.line().unwrap()
                            )
                            .unwrap();
                        }
                        writeln!(c, "{}", record.args()).unwrap();
                    }
                    None => panic!("Logger not set"),
                }
            }
        }
    }

    fn flush(&self) {}
}

unsafe impl core::marker::Send for ConsoleLogger {}
unsafe impl core::marker::Sync for ConsoleLogger {}
