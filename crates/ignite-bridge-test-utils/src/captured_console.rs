use std::io;
use std::sync::Arc;

use ignite_bridge_console::SharedWriter;
use parking_lot::Mutex;

/// In-memory console for asserting what a writer mirrored to stdout.
///
/// Clones share the same buffer, so a test can keep one handle and pass
/// another to the writer.
#[derive(Debug, Default, Clone)]
pub struct CapturedConsole {
    buf: Arc<Mutex<String>>,
}

impl CapturedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.buf.lock().clone()
    }

    /// Returns the captured output and clears the buffer.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buf.lock())
    }
}

impl SharedWriter for CapturedConsole {
    fn write(&self, data: &str) -> io::Result<()> {
        self.buf.lock().push_str(data);
        Ok(())
    }
}
