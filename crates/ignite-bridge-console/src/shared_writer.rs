use std::io::{self, Write};

/// Console stream a [crate::ConsoleWriter] mirrors every message to.
///
/// Implementations are shared between threads and must emit each `data`
/// as one uninterrupted chunk.
pub trait SharedWriter: Send + Sync {
    fn write(&self, data: &str) -> io::Result<()>;
}

/// The process stdout, which the embedding runtime redirects to its own
/// console. Holding the stdout lock keeps a message from splitting around
/// `print!` calls of other threads, and the explicit flush gets it out
/// before a crash can lose it.
impl SharedWriter for io::Stdout {
    fn write(&self, data: &str) -> io::Result<()> {
        let mut out = self.lock();
        out.write_all(data.as_bytes()).and_then(|()| out.flush())
    }
}
