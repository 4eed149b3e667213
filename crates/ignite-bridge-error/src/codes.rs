use std::fmt::Display;

use int_enum::IntEnum;

/// Error codes for the platform bridge.
///
/// Error codes define the general "semantic type" of a [crate::BridgeError].
/// Each error code is a 4-digit number stored as a u16 type. The C ABI
/// reports failures to the embedding runtime as the negated code.
#[repr(u16)]
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Eq, PartialEq, IntEnum)]
pub enum ErrorCode {
    IoError = 1001,
    FileIoError = 1003,
    InvalidPath = 1006,
    InvalidArgument = 1007,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04}", *self as u16)
    }
}

impl ErrorCode {
    /// Status value handed across the C ABI for this code.
    pub fn as_status(&self) -> i32 {
        -i32::from(*self as u16)
    }
}
