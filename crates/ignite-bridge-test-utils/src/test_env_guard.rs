use std::collections::HashMap;
use std::env;

/// Environment variable guard that isolates tests from external environment variables.
///
/// **CAUTION**: Uses unsafe env::remove_var and env::set_var methods,
/// that will NOT work as expected if multiple tests running on different threads
/// collide on the same environment variable they need with different values.
/// Keep tests that read `IGNITE_NET_*` or locale variables in a test binary of
/// their own.
///
/// The guard clears all environment variables except an allow-list of exact
/// names and prefixes, and restores the original environment when dropped.
/// Variables that were passed through keep whatever value they were given
/// inside the guard.
#[cfg_attr(windows, allow(dead_code))]
pub struct TestEnvGuard {
    // The state of the environment when the guard was created.
    saved_env: HashMap<String, String>,
    // Variables that were preserved and thus should not be restored when the
    // guard is dropped.
    pass_through_vars: Vec<String>,
}

impl TestEnvGuard {
    const DEFAULT_ALLOWED_PREFIXES: &'static [&'static str] = &["RUST_", "CARGO_"];

    const EXACT_MATCH_VARS: &'static [&'static str] = &[
        "CI",
        "HOME",
        "NEXTEST",
        "PATH",
        "RUSTFLAGS",
        "TMPDIR",
        "USER",
    ];

    /// Windows-specific variables required to create temp files and resolve paths
    #[cfg(windows)]
    const OS_EXACT_MATCH_VARS: &'static [&'static str] = &[
        "APPDATA",
        "COMSPEC",
        "LOCALAPPDATA",
        "PATHEXT",
        "SystemDrive",
        "SystemRoot",
        "TEMP",
        "TMP",
        "USERPROFILE",
        "WINDIR",
    ];

    #[cfg(not(windows))]
    const OS_EXACT_MATCH_VARS: &'static [&'static str] = &[];

    /// Create a new environment guard with custom allowed env vars.
    ///
    /// # Arguments
    /// * `allowed_vars` - List of exact environment variable names to preserve
    /// * `allowed_prefixes` - List of environment variable prefixes to preserve
    #[cfg_attr(windows, allow(unused_variables, unreachable_code))]
    pub fn new(allowed_vars: &[&str], allowed_prefixes: &[&str]) -> Self {
        // Process-wide env mutation is unreliable on Windows test runners, the
        // guard is a no-op there.
        #[cfg(windows)]
        {
            return Self {
                saved_env: Default::default(),
                pass_through_vars: Default::default(),
            };
        }

        let saved_env: HashMap<String, String> = env::vars().collect();
        let mut pass_through_vars = vec![];

        for key in saved_env.keys() {
            if !Self::should_keep_var(key, allowed_vars, allowed_prefixes) {
                unsafe {
                    env::remove_var(key);
                }
            } else {
                pass_through_vars.push(key.clone());
            }
        }

        Self {
            saved_env,
            pass_through_vars,
        }
    }

    /// Sets a variable for the lifetime of the guard.
    pub fn set(&self, key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    /// Removes a variable for the lifetime of the guard.
    pub fn remove(&self, key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }

    fn should_keep_var(key: &str, allowed_vars: &[&str], allowed_prefixes: &[&str]) -> bool {
        if allowed_vars
            .iter()
            .any(|var| Self::env_var_name_matches(key, var))
        {
            return true;
        }

        allowed_prefixes
            .iter()
            .any(|prefix| Self::env_var_name_starts_with(key, prefix))
    }

    /// Compare environment variable names using OS-appropriate case sensitivity
    #[cfg(windows)]
    #[allow(dead_code)]
    fn env_var_name_matches(key: &str, expected: &str) -> bool {
        key.eq_ignore_ascii_case(expected)
    }

    #[cfg(not(windows))]
    fn env_var_name_matches(key: &str, expected: &str) -> bool {
        key == expected
    }

    #[cfg(windows)]
    #[allow(dead_code)]
    fn env_var_name_starts_with(key: &str, prefix: &str) -> bool {
        key.len() >= prefix.len() && key[..prefix.len()].eq_ignore_ascii_case(prefix)
    }

    #[cfg(not(windows))]
    fn env_var_name_starts_with(key: &str, prefix: &str) -> bool {
        key.starts_with(prefix)
    }
}

impl Drop for TestEnvGuard {
    fn drop(&mut self) {
        #[cfg(not(windows))]
        {
            let cur_vars = env::vars().collect::<HashMap<String, String>>();

            // Remove or restore variables created/modified within the guard
            for key in cur_vars.keys() {
                if self.pass_through_vars.contains(key) {
                    continue;
                }

                match self.saved_env.get(key) {
                    Some(value) => unsafe {
                        env::set_var(key, value);
                    },
                    None => unsafe {
                        env::remove_var(key);
                    },
                }
            }

            // Restore variables removed by the guard
            for (key, value) in &self.saved_env {
                if !cur_vars.contains_key(key) {
                    unsafe {
                        env::set_var(key, value);
                    }
                }
            }
        }
    }
}

impl Default for TestEnvGuard {
    fn default() -> Self {
        let mut allowed_vars = Self::EXACT_MATCH_VARS.to_vec();
        allowed_vars.extend(Self::OS_EXACT_MATCH_VARS);

        Self::new(&allowed_vars, Self::DEFAULT_ALLOWED_PREFIXES)
    }
}
