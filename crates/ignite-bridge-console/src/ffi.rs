//! C ABI used by the embedded runtime to reach the process-wide writer.
//!
//! Functions return `0` on success and a negated [ErrorCode] otherwise.
//! Failures are logged and never unwind into the caller.

use std::slice;

use ignite_bridge_error::{BridgeError, ErrorCode, bridge_err};

use crate::console_writer::ConsoleWriter;
use crate::global::init_global;

/// Initializes the process-wide writer. Calling it again is a no-op.
#[unsafe(no_mangle)]
pub extern "C" fn ignite_console_writer_init() -> i32 {
    match init_global() {
        Ok(_) => 0,
        Err(e) => report("initialize console writer", &e),
    }
}

/// Writes `len` bytes of UTF-8 text at `message`; invalid sequences are
/// replaced. Initializes the writer on first use.
///
/// # Safety
///
/// `message` must either be null with `len == 0`, or point to `len` bytes
/// that stay readable for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ignite_console_writer_write(
    message: *const u8,
    len: usize,
    is_error: bool,
) -> i32 {
    let bytes: &[u8] = if message.is_null() {
        if len != 0 {
            let err = bridge_err!(
                ErrorCode::InvalidArgument,
                "Null message pointer with length {len}"
            );
            return report("write console message", &err);
        }
        &[]
    } else {
        // SAFETY: the caller guarantees `message` points to `len` readable bytes
        unsafe { slice::from_raw_parts(message, len) }
    };

    match init_global() {
        Ok(writer) => write_bytes(writer, bytes, is_error),
        Err(e) => report("initialize console writer", &e),
    }
}

fn write_bytes(writer: &ConsoleWriter, bytes: &[u8], is_error: bool) -> i32 {
    let message = String::from_utf8_lossy(bytes);
    match writer.write(&message, is_error) {
        Ok(()) => 0,
        Err(e) => report("write console message", &e),
    }
}

fn report(action: &str, err: &BridgeError) -> i32 {
    tracing::error!(code = %err.code, "Failed to {action}: {err}");
    if let Some(backtrace) = err.get_backtrace() {
        tracing::debug!("Backtrace:\n{backtrace}");
    }
    err.code.as_status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::testing::{BrokenSink, MemoryConsole};

    #[test]
    fn test_failed_log_write_returns_negated_code() {
        let console = MemoryConsole::default();
        let writer = ConsoleWriter::from_sinks(
            PathBuf::from("console.log"),
            false,
            Box::new(BrokenSink),
            Box::new(console.clone()),
        );

        let status = write_bytes(&writer, b"ffi message\n", false);
        assert_eq!(status, -1003);
        assert_eq!(status, ErrorCode::FileIoError.as_status());
        assert_eq!(console.contents(), "ffi message\n");
    }

    #[test]
    fn test_report_returns_status_of_code() {
        let err = bridge_err!(ErrorCode::InvalidPath, "no parent directory");
        assert_eq!(report("initialize console writer", &err), -1006);
    }
}
