//! Console writer for the platform bridge.
//!
//! Captures stdout/stderr of the embedded runtime, mirrors it to the host
//! console and persists it in `dotnet-test-2.log` next to the host binary.

mod config;
mod console_writer;
pub mod ffi;
mod global;
mod known_warnings;
mod shared_writer;
#[cfg(test)]
mod testing;

pub use config::{ConsoleWriterConfig, LOG_FILE_NAME};
pub use console_writer::ConsoleWriter;
pub use global::{global, init_global, init_global_with_config};
pub use known_warnings::{JAVA_ILLEGAL_ACCESS_WARNINGS, is_known_warning};
pub use shared_writer::SharedWriter;
