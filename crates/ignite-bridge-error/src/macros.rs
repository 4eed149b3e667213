/// bridge_err!(code,msg) construct a [BridgeError](crate::BridgeError), to be
/// used for further processing, e.g. typically used in
/// `.map_err(|e| bridge_err!(..).with_cause(e))`, etc
#[macro_export]
macro_rules! bridge_err {
    ($code:expr, $($arg:tt)*) => {
        Box::new($crate::BridgeError::new(
            $code,
            format!($($arg)*),
        ))
    };
}

/// Builds the closure passed to
/// [ContextableResult::with_context](crate::ContextableResult::with_context).
#[macro_export]
macro_rules! ectx {
    (code => $code:expr, $($arg:tt)*) => {
        || $crate::ErrContext {
            code: Some($code),
            context: Some(format!($($arg)*)),
        }
    };
    (code => $code:expr) => {
        || $crate::ErrContext {
            code: Some($code),
            context: None,
        }
    };
    ($($arg:tt)*) => {
        || $crate::ErrContext {
            code: None,
            context: Some(format!($($arg)*)),
        }
    };
}
