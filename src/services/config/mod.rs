pub mod models;

pub use models::*;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Environment variable overriding `AppSettings::root_dir`.
pub const ENV_ROOT_DIR: &str = "THEMEKIT_ROOT_DIR";
/// Environment variable overriding `AppSettings::default_theme`.
pub const ENV_DEFAULT_THEME: &str = "THEMEKIT_DEFAULT_THEME";

/// JSON-file backed settings store.
pub struct ConfigService {
    config_path: PathBuf,
    settings: Mutex<AppSettings>,
}

impl ConfigService {
    /// Load settings from `config_path`, falling back to defaults when the
    /// file is missing or unreadable. Environment overrides are applied last.
    pub fn new(config_path: PathBuf) -> Self {
        let mut settings = Self::load_from_file(&config_path);
        Self::apply_env_overrides(&mut settings);

        Self {
            config_path,
            settings: Mutex::new(settings),
        }
    }

    fn load_from_file(path: &Path) -> AppSettings {
        if !path.exists() {
            log::info!(
                "No config at {}, using default settings",
                path.display()
            );
            return AppSettings::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to read config {}: {e}", path.display());
                return AppSettings::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Corrupt config {}, using defaults: {e}", path.display());
            AppSettings::default()
        })
    }

    fn apply_env_overrides(settings: &mut AppSettings) {
        if let Ok(root) = std::env::var(ENV_ROOT_DIR) {
            if !root.trim().is_empty() {
                settings.root_dir = PathBuf::from(root);
            }
        }
        if let Ok(theme) = std::env::var(ENV_DEFAULT_THEME) {
            if !theme.trim().is_empty() {
                settings.default_theme = theme;
            }
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn get_settings(&self) -> AppSettings {
        self.settings
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Persist `settings` atomically: write a sibling temp file, then
    /// rename it over the config path.
    pub fn save_settings(&self, settings: AppSettings) -> Result<(), String> {
        let json = serde_json::to_string_pretty(&settings)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;

        let parent = match self.config_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)
            .map_err(|e| format!("Failed to create config dir: {e}"))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&parent)
            .map_err(|e| format!("Failed to create temp config: {e}"))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| format!("Failed to write temp config: {e}"))?;
        tmp.persist(&self.config_path)
            .map_err(|e| format!("Failed to replace config: {}", e.error))?;

        match self.settings.lock() {
            Ok(mut guard) => *guard = settings,
            Err(poisoned) => *poisoned.into_inner() = settings,
        }

        log::info!("Saved settings to {}", self.config_path.display());
        Ok(())
    }
}
