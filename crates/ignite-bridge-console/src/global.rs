//! Process-wide console writer.
//!
//! The embedded runtime calls back into the host at arbitrary intervals for
//! the whole life of the process, so the writer lives in a `static` and is
//! never dropped or reclaimed. Callers get a `&'static` reference they never
//! need to renew.

use std::sync::OnceLock;

use ignite_bridge_error::BridgeResult;
use parking_lot::{Mutex, const_mutex};

use crate::config::ConsoleWriterConfig;
use crate::console_writer::ConsoleWriter;

static WRITER: OnceLock<ConsoleWriter> = OnceLock::new();

/// Serializes first-time construction so the log file is truncated once.
static INIT_LOCK: Mutex<()> = const_mutex(());

/// The process-wide writer, if it has been initialized.
pub fn global() -> Option<&'static ConsoleWriter> {
    WRITER.get()
}

/// Initializes the process-wide writer from the environment, or returns the
/// existing one.
pub fn init_global() -> BridgeResult<&'static ConsoleWriter> {
    get_or_try_init(ConsoleWriter::new)
}

/// Same as [init_global] with an explicit configuration. The first
/// successful initialization wins; later configurations are ignored.
pub fn init_global_with_config(
    config: ConsoleWriterConfig,
) -> BridgeResult<&'static ConsoleWriter> {
    get_or_try_init(|| ConsoleWriter::with_config(config))
}

fn get_or_try_init(
    make: impl FnOnce() -> BridgeResult<ConsoleWriter>,
) -> BridgeResult<&'static ConsoleWriter> {
    if let Some(writer) = WRITER.get() {
        return Ok(writer);
    }

    let _guard = INIT_LOCK.lock();
    if let Some(writer) = WRITER.get() {
        return Ok(writer);
    }

    let writer = make()?;
    Ok(WRITER.get_or_init(|| writer))
}
