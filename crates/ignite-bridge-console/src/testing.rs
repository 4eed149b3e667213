//! In-crate test doubles for the console and the log sink.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::shared_writer::SharedWriter;

#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryConsole {
    out: Arc<Mutex<String>>,
}

impl MemoryConsole {
    pub(crate) fn contents(&self) -> String {
        self.out.lock().clone()
    }
}

impl SharedWriter for MemoryConsole {
    fn write(&self, data: &str) -> io::Result<()> {
        self.out.lock().push_str(data);
        Ok(())
    }
}

pub(crate) struct BrokenConsole;

impl SharedWriter for BrokenConsole {
    fn write(&self, _data: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"))
    }
}

/// A log sink whose device is full.
pub(crate) struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
