use std::{
    backtrace::Backtrace,
    fmt::{self, Debug, Display, Formatter},
    io,
};

use super::ErrorCode;

pub type BridgeResult<T, E = Box<BridgeError>> = Result<T, E>;

pub struct BridgeError {
    pub code: ErrorCode,
    pub context: String,
    cause: Option<io::Error>,
    backtrace: Backtrace,
}

impl Debug for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeError")
            .field("code", &self.code)
            .field("context", &self.context)
            .field("cause", &self.cause)
            .finish()
    }
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.context)?;
        if let Some(cause) = &self.cause {
            if !self.context.is_empty() {
                write!(f, ": ")?;
            }
            write!(f, "{cause}")?
        }
        Ok(())
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|e| e as &dyn std::error::Error)
    }
}

impl BridgeError {
    pub fn new(code: ErrorCode, context: impl Into<String>) -> Self {
        BridgeError {
            code,
            context: context.into(),
            cause: None,
            backtrace: Backtrace::capture(),
        }
    }

    pub fn with_cause(self, cause: io::Error) -> Self {
        BridgeError {
            cause: Some(cause),
            ..self
        }
    }

    pub fn with_context(self, context: impl Into<String>) -> Self {
        BridgeError {
            context: context.into(),
            ..self
        }
    }

    pub fn with_code(self, code: ErrorCode) -> Self {
        BridgeError { code, ..self }
    }

    /// The underlying I/O error, if any.
    pub fn io_cause(&self) -> Option<&io::Error> {
        self.cause.as_ref()
    }

    /// True if a backtrace was captured, i.e. `RUST_BACKTRACE` or
    /// `RUST_LIB_BACKTRACE` was set when the error was created.
    pub fn has_backtrace(&self) -> bool {
        self.backtrace.status() == std::backtrace::BacktraceStatus::Captured
    }

    /// Returns the backtrace as a string, if available.
    pub fn get_backtrace(&self) -> Option<String> {
        if self.has_backtrace() {
            Some(self.backtrace.to_string())
        } else {
            None
        }
    }
}

impl From<io::Error> for BridgeError {
    fn from(e: io::Error) -> Self {
        BridgeError::new(ErrorCode::IoError, "").with_cause(e)
    }
}

impl From<io::Error> for Box<BridgeError> {
    fn from(e: io::Error) -> Self {
        Box::new(e.into())
    }
}

impl From<Box<BridgeError>> for BridgeError {
    fn from(e: Box<BridgeError>) -> Self {
        *e
    }
}

// --- Explicit conversions ---

mod private {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> {}
}

/// Attaches a code and/or a message to the error side of a result, turning
/// it into a [BridgeResult]. Usually paired with the `ectx!` macro:
///
/// ```ignore
/// fs::remove_file(&path).with_context(ectx!(code => ErrorCode::FileIoError, "..."))?;
/// ```
pub trait ContextableResult<T>: private::Sealed {
    fn with_context(self, f: impl FnOnce() -> ErrContext) -> BridgeResult<T>;
}

#[derive(Debug, Clone, Default)]
pub struct ErrContext {
    pub code: Option<ErrorCode>,
    pub context: Option<String>,
}

impl<T, E> ContextableResult<T> for Result<T, E>
where
    E: Into<BridgeError>,
{
    fn with_context(self, f: impl FnOnce() -> ErrContext) -> BridgeResult<T> {
        self.map_err(|e| {
            let e = e.into();
            let ctx = f();
            let e = if let Some(code) = ctx.code {
                e.with_code(code)
            } else {
                e
            };
            let e = if let Some(context) = ctx.context {
                e.with_context(context)
            } else {
                e
            };
            Box::new(e)
        })
    }
}
