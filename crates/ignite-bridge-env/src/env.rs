use std::env;
use std::path::PathBuf;

use ignite_bridge_error::{BridgeResult, ErrorCode, bridge_err};

/// Whether stderr warnings about illegal reflective access (emitted by
/// Java 9+) should be flagged as suppressible in the captured output.
pub const ENV_SUPPRESS_JAVA_ILLEGAL_ACCESS_WARNINGS: &str =
    "IGNITE_NET_SUPPRESS_JAVA_ILLEGAL_ACCESS_WARNINGS";

/// Locale variables in POSIX precedence order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Snapshot of the process environment as seen by the bridge.
///
/// Values are read once; later changes to the environment are not
/// observed by a snapshot that already exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeEnv {
    suppress_illegal_access_warnings: bool,
    culture: String,
}

impl BridgeEnv {
    pub fn from_env() -> Self {
        let suppress =
            parse_suppress_flag(env::var(ENV_SUPPRESS_JAVA_ILLEGAL_ACCESS_WARNINGS).ok().as_deref());

        let culture = LOCALE_VARS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.is_empty())
            .map(|value| normalize_culture(&value))
            .unwrap_or_default();

        Self {
            suppress_illegal_access_warnings: suppress,
            culture,
        }
    }

    pub fn suppress_illegal_access_warnings(&self) -> bool {
        self.suppress_illegal_access_warnings
    }

    /// Active culture name, e.g. `en-US`. Empty for the invariant culture.
    pub fn culture(&self) -> &str {
        &self.culture
    }
}

/// Only the exact, case-sensitive value `true` enables the flag.
pub fn parse_suppress_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Turns a POSIX locale (`en_US.UTF-8@euro`) into a culture name (`en-US`).
pub fn normalize_culture(locale: &str) -> String {
    let base = locale.split(['.', '@']).next().unwrap_or_default();
    match base {
        "" | "C" | "POSIX" => String::new(),
        _ => base.replace('_', "-"),
    }
}

/// Directory containing the host executable.
pub fn host_binary_dir() -> BridgeResult<PathBuf> {
    let exe_path = env::current_exe().map_err(|e| {
        bridge_err!(ErrorCode::InvalidPath, "Failed to get current exe path").with_cause(e)
    })?;
    exe_path.parent().map(PathBuf::from).ok_or_else(|| {
        bridge_err!(
            ErrorCode::InvalidPath,
            "Executable path has no parent directory: {}",
            exe_path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suppress_flag_requires_exact_true() {
        assert!(parse_suppress_flag(Some("true")));

        for value in ["TRUE", "True", "1", "yes", " true", "true ", ""] {
            assert!(!parse_suppress_flag(Some(value)), "{value:?} must not enable");
        }
        assert!(!parse_suppress_flag(None));
    }

    #[test]
    fn test_normalize_culture() {
        assert_eq!(normalize_culture("en_US.UTF-8"), "en-US");
        assert_eq!(normalize_culture("de_DE@euro"), "de-DE");
        assert_eq!(normalize_culture("fr_CA.ISO-8859-1@latin"), "fr-CA");
        assert_eq!(normalize_culture("ja"), "ja");
        assert_eq!(normalize_culture("C.UTF-8"), "");
        assert_eq!(normalize_culture("C"), "");
        assert_eq!(normalize_culture("POSIX"), "");
        assert_eq!(normalize_culture(""), "");
    }

    #[test]
    fn test_host_binary_dir_contains_test_binary() {
        let dir = host_binary_dir().unwrap();
        let exe = env::current_exe().unwrap();
        assert_eq!(exe.parent().unwrap(), dir.as_path());
        assert!(dir.is_dir());
    }
}
