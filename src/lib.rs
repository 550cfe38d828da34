pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::config::{AppSettings, ConfigService};
pub use services::themes::ThemeService;
pub use types::errors::{ThemeError, ThemeResult};
