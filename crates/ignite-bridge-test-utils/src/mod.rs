pub mod captured_console;
pub mod test_env_guard;

pub use captured_console::CapturedConsole;
pub use test_env_guard::TestEnvGuard;
