//! Theme management: installing packages, duplicating and removing themes,
//! listing what is installed and resolving templates across themes.

mod install;
mod listing;
mod manage;
pub mod manifest;
pub mod template;

pub use install::{InstallResult, REQUIRED_FILES};
pub use listing::InstalledTheme;
pub use manifest::{ThemeManifest, MANIFEST_FILE};
pub use template::{FsTemplateProbe, TemplateProbe, TemplateReference};

use crate::services::config::AppSettings;
use crate::services::fs_utils::{Filesystem, LocalFilesystem};
use crate::services::i18n::{MessageCatalog, Translator, DOMAIN_VALIDATORS, MSG_MISSING_FILES};
use crate::services::paths::{PathKind, PathsProvider, SystemPaths};
use crate::types::errors::ThemeError;
use std::path::PathBuf;

pub struct ThemeService {
    paths: Box<dyn PathsProvider>,
    templates: Box<dyn TemplateProbe>,
    translator: Box<dyn Translator>,
    fs: Box<dyn Filesystem>,
    default_theme: String,
    protected_themes: Vec<String>,
    allowed_extensions: Vec<String>,
}

impl ThemeService {
    pub fn new(
        paths: impl PathsProvider + 'static,
        templates: impl TemplateProbe + 'static,
        translator: impl Translator + 'static,
        fs: impl Filesystem + 'static,
        settings: &AppSettings,
    ) -> Self {
        Self {
            paths: Box::new(paths),
            templates: Box::new(templates),
            translator: Box::new(translator),
            fs: Box::new(fs),
            default_theme: settings.default_theme.clone(),
            protected_themes: settings.protected_themes.clone(),
            allowed_extensions: settings.allowed_extensions.clone(),
        }
    }

    /// Service wired to the local disk and the built-in message catalog.
    pub fn from_settings(settings: &AppSettings) -> Self {
        let paths = SystemPaths::from_settings(settings);
        let probe = FsTemplateProbe::from_paths(&paths);
        Self::new(
            paths,
            probe,
            MessageCatalog::default(),
            LocalFilesystem,
            settings,
        )
    }

    pub fn default_theme(&self) -> &str {
        &self.default_theme
    }

    pub fn set_default_theme(&mut self, theme: &str) {
        self.default_theme = theme.to_string();
    }

    pub fn is_protected(&self, theme: &str) -> bool {
        self.protected_themes.iter().any(|t| t == theme)
    }

    fn themes_root(&self) -> PathBuf {
        self.paths.system_path(PathKind::Themes, true)
    }

    fn trans(&self, key: &str, params: &[(&str, String)]) -> String {
        self.translator.trans(key, params, DOMAIN_VALIDATORS)
    }

    fn missing_files_error(&self, files: Vec<String>) -> ThemeError {
        let message = self.trans(MSG_MISSING_FILES, &[("%files%", files.join(", "))]);
        ThemeError::MissingFiles { files, message }
    }
}

#[cfg(test)]
#[path = "tests/fakes.rs"]
mod fakes;

#[cfg(test)]
#[path = "tests/install_tests.rs"]
mod install_tests;

#[cfg(test)]
#[path = "tests/manage_tests.rs"]
mod manage_tests;

#[cfg(test)]
#[path = "tests/template_tests.rs"]
mod template_tests;

#[cfg(test)]
#[path = "tests/listing_tests.rs"]
mod listing_tests;
