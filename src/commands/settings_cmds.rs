use crate::services::config::{AppSettings, ConfigService};
use crate::types::errors::{CommandError, CommandResult};

pub fn get_settings(state: &ConfigService) -> AppSettings {
    state.get_settings()
}

pub fn save_settings(state: &ConfigService, settings: AppSettings) -> CommandResult<()> {
    state.save_settings(settings).map_err(CommandError::Io)
}

/// Persist a new default theme.
pub fn set_default_theme(state: &ConfigService, theme: String) -> CommandResult<()> {
    if theme.trim().is_empty() {
        return Err(CommandError::Validation(
            "Default theme cannot be empty".to_string(),
        ));
    }
    let mut settings = state.get_settings();
    settings.default_theme = theme;
    save_settings(state, settings)
}
