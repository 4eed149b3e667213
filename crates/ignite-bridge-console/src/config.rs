use std::path::{Path, PathBuf};

use ignite_bridge_env::{BridgeEnv, host_binary_dir};
use ignite_bridge_error::BridgeResult;

/// Name of the log file created next to the host binary.
pub const LOG_FILE_NAME: &str = "dotnet-test-2.log";

/// Immutable settings of a [crate::ConsoleWriter], assembled once before
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleWriterConfig {
    pub log_file_path: PathBuf,
    pub suppress_known_warnings: bool,
    pub culture: String,
}

impl ConsoleWriterConfig {
    /// Log file in the host binary directory, flags from the environment.
    pub fn from_env() -> BridgeResult<Self> {
        Ok(Self::from_env_in(host_binary_dir()?))
    }

    /// Log file in `dir`, flags from the environment.
    pub fn from_env_in(dir: impl AsRef<Path>) -> Self {
        let env = BridgeEnv::from_env();
        Self {
            log_file_path: dir.as_ref().join(LOG_FILE_NAME),
            suppress_known_warnings: env.suppress_illegal_access_warnings(),
            culture: env.culture().to_string(),
        }
    }
}
