pub mod config;
pub mod init;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use init::{resolve_config, ConfigOverrides};
pub use wiring::{wire_dependencies, AppRuntime};
