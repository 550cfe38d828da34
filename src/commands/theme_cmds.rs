//! Theme commands. Each returns a serializable payload or a `CommandError`.

use crate::services::config::ConfigService;
use crate::services::themes::{InstallResult, InstalledTheme, ThemeService};
use crate::types::errors::CommandResult;
use serde::Serialize;
use std::path::Path;

/// Shared state for the theme commands.
pub struct ThemeState {
    pub service: ThemeService,
}

impl ThemeState {
    pub fn new(service: ThemeService) -> Self {
        Self { service }
    }

    pub fn from_config(config: &ConfigService) -> Self {
        Self::new(ThemeService::from_settings(&config.get_settings()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CopyResult {
    pub origin: String,
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateResolution {
    pub requested: String,
    pub resolved: String,
}

pub fn install_theme_cmd(state: &ThemeState, zip_path: String) -> CommandResult<InstallResult> {
    Ok(state.service.install(Path::new(&zip_path))?)
}

pub fn copy_theme_cmd(
    state: &ThemeState,
    origin: String,
    new_name: String,
    new_dir_name: Option<String>,
) -> CommandResult<CopyResult> {
    let path = state
        .service
        .copy(&origin, &new_name, new_dir_name.as_deref())?;
    Ok(CopyResult {
        origin,
        name: new_name,
        path: path.to_string_lossy().to_string(),
    })
}

pub fn rename_theme_cmd(state: &ThemeState, theme: String, new_name: String) -> CommandResult<()> {
    Ok(state.service.rename(&theme, &new_name)?)
}

pub fn delete_theme_cmd(state: &ThemeState, theme: String) -> CommandResult<()> {
    Ok(state.service.delete(&theme)?)
}

pub fn validate_theme_cmd(state: &ThemeState, theme: String) -> CommandResult<()> {
    Ok(state.service.validate(&theme)?)
}

pub fn list_themes_cmd(
    state: &ThemeState,
    feature: Option<String>,
) -> CommandResult<Vec<InstalledTheme>> {
    Ok(state.service.installed_themes(feature.as_deref())?)
}

pub fn export_theme_cmd(state: &ThemeState, theme: String) -> CommandResult<String> {
    let path = state.service.export(&theme)?;
    Ok(path.to_string_lossy().to_string())
}

pub fn resolve_template_cmd(
    state: &ThemeState,
    template: String,
) -> CommandResult<TemplateResolution> {
    let resolved = state.service.check_for_twig_template(&template)?;
    Ok(TemplateResolution {
        requested: template,
        resolved,
    })
}
