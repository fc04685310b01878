mod config;
pub mod constants;

pub use config::{Config, ConfigError, Mode, Task};
