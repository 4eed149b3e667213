use std::borrow::Cow;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ignite_bridge_error::{BridgeResult, ContextableResult, ErrorCode, ectx};
use parking_lot::Mutex;

use crate::config::ConsoleWriterConfig;
use crate::known_warnings::is_known_warning;
use crate::shared_writer::SharedWriter;

/// Writes console output of the embedded runtime to stdout and to a log file.
///
/// Error-stream messages are tagged as `|ERR-<known>-<suppress>|: <message>`
/// so that log scrapers can tell benign JVM warnings apart. Nothing is ever
/// dropped here.
///
/// The file is opened once and stays open until the process exits; every
/// write is flushed so the tail of the log survives a crash.
pub struct ConsoleWriter {
    log_file_path: PathBuf,
    suppress_known_warnings: bool,
    file: Mutex<Box<dyn Write + Send>>,
    console: Box<dyn SharedWriter>,
}

impl fmt::Debug for ConsoleWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleWriter")
            .field("log_file_path", &self.log_file_path)
            .field("suppress_known_warnings", &self.suppress_known_warnings)
            .finish_non_exhaustive()
    }
}

impl ConsoleWriter {
    /// Creates a writer logging next to the host binary, configured from the
    /// process environment.
    pub fn new() -> BridgeResult<Self> {
        Self::with_config(ConsoleWriterConfig::from_env()?)
    }

    pub fn with_config(config: ConsoleWriterConfig) -> BridgeResult<Self> {
        Self::with_console(config, Box::new(io::stdout()))
    }

    /// Creates a writer mirroring messages to `console` instead of stdout.
    ///
    /// A log file left over from a previous run is deleted first.
    pub fn with_console(
        config: ConsoleWriterConfig,
        console: Box<dyn SharedWriter>,
    ) -> BridgeResult<Self> {
        let ConsoleWriterConfig {
            log_file_path,
            suppress_known_warnings,
            culture,
        } = config;

        remove_stale_log(&log_file_path)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file_path)
            .with_context(ectx!(
                code => ErrorCode::FileIoError,
                "Failed to open log file {}",
                log_file_path.display()
            ))?;

        let write_header = |file: &mut File| -> io::Result<()> {
            writeln!(file, "ConsoleWriter Initialized.")?;
            writeln!(file, "CULTURE: {culture}")?;
            file.flush()
        };
        write_header(&mut file).with_context(ectx!(
            code => ErrorCode::FileIoError,
            "Failed to initialize log file {}",
            log_file_path.display()
        ))?;

        tracing::debug!(
            path = %log_file_path.display(),
            suppress_known_warnings,
            culture = %culture,
            "Console writer initialized"
        );

        Ok(Self::from_sinks(
            log_file_path,
            suppress_known_warnings,
            Box::new(file),
            console,
        ))
    }

    /// Creates a writer over an already-open log sink.
    ///
    /// Nothing is deleted or written up front; `log_file_path` only names the
    /// sink in errors.
    pub fn from_sinks(
        log_file_path: PathBuf,
        suppress_known_warnings: bool,
        file: Box<dyn Write + Send>,
        console: Box<dyn SharedWriter>,
    ) -> Self {
        Self {
            log_file_path,
            suppress_known_warnings,
            file: Mutex::new(file),
            console,
        }
    }

    pub fn log_file_path(&self) -> &Path {
        &self.log_file_path
    }

    pub fn suppress_known_warnings(&self) -> bool {
        self.suppress_known_warnings
    }

    /// Writes the message to the console and appends it to the log file.
    ///
    /// No newline is added. A console failure does not prevent the file
    /// write. When the file write fails its error is returned, even if the
    /// console failed as well; the console error is then only logged.
    pub fn write(&self, message: &str, is_error: bool) -> BridgeResult<()> {
        let message = self.format_message(message, is_error);

        let console_res = self.console.write(&message);

        let file_res = {
            let mut file = self.file.lock();
            file.write_all(message.as_bytes())
                .and_then(|()| file.flush())
        };

        if let Err(e) = file_res {
            if let Err(console_err) = &console_res {
                tracing::warn!("Failed to write to console: {console_err}");
            }
            return Err(e).with_context(ectx!(
                code => ErrorCode::FileIoError,
                "Failed to write to log file {}",
                self.log_file_path.display()
            ));
        }

        console_res.with_context(ectx!(code => ErrorCode::IoError, "Failed to write to console"))
    }

    /// Text that [Self::write] emits for the given message.
    pub fn format_message<'a>(&self, message: &'a str, is_error: bool) -> Cow<'a, str> {
        if is_error {
            Cow::Owned(format!(
                "|ERR-{}-{}|: {message}",
                bool_name(is_known_warning(message)),
                bool_name(self.suppress_known_warnings)
            ))
        } else {
            Cow::Borrowed(message)
        }
    }
}

/// Log scrapers match on `True` / `False`.
fn bool_name(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn remove_stale_log(path: &Path) -> BridgeResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(ectx!(
            code => ErrorCode::FileIoError,
            "Failed to delete stale log file {}",
            path.display()
        )),
    }
}
