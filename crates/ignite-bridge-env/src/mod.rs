pub mod env;

pub use env::{
    BridgeEnv, ENV_SUPPRESS_JAVA_ILLEGAL_ACCESS_WARNINGS, host_binary_dir, normalize_culture,
    parse_suppress_flag,
};
