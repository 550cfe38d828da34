use super::manifest::{ThemeManifest, MANIFEST_FILE};
use super::ThemeService;
use crate::services::archive;
use crate::services::fs_utils::path_utils::is_valid_theme_key;
use crate::services::paths::PathKind;
use crate::types::errors::ThemeResult;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct InstalledTheme {
    pub key: String,
    pub path: PathBuf,
    pub manifest: ThemeManifest,
}

impl ThemeService {
    /// Whether `theme` is installed, i.e. has a directory with a manifest.
    pub fn exists(&self, theme: &str) -> bool {
        is_valid_theme_key(theme)
            && self
                .fs
                .exists(&self.themes_root().join(theme).join(MANIFEST_FILE))
    }

    /// Keys of every installed theme, sorted. A missing themes directory
    /// means nothing is installed.
    pub fn installed_theme_keys(&self) -> ThemeResult<Vec<String>> {
        let root = self.themes_root();
        let dirs = match self.fs.list_dirs(&root) {
            Ok(dirs) => dirs,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(dirs
            .into_iter()
            .filter(|key| self.fs.exists(&root.join(key).join(MANIFEST_FILE)))
            .collect())
    }

    /// Installed themes, optionally only those declaring `feature`.
    ///
    /// Themes whose manifest cannot be read are logged and left out.
    pub fn installed_themes(&self, feature: Option<&str>) -> ThemeResult<Vec<InstalledTheme>> {
        let mut themes = Vec::new();
        for key in self.installed_theme_keys()? {
            let theme = match self.theme(&key) {
                Ok(theme) => theme,
                Err(e) => {
                    log::warn!("Skipping theme '{key}': {e}");
                    continue;
                }
            };

            if feature.map_or(true, |f| theme.manifest.has_feature(f)) {
                themes.push(theme);
            }
        }
        Ok(themes)
    }

    pub fn theme(&self, key: &str) -> ThemeResult<InstalledTheme> {
        let path = self.theme_dir(key)?;
        let manifest = self.read_manifest(&path)?;
        Ok(InstalledTheme {
            key: key.to_string(),
            path,
            manifest,
        })
    }

    /// Like `theme`, but falls back to the default theme when `key` is
    /// absent or not installed.
    pub fn theme_or_default(&self, key: Option<&str>) -> ThemeResult<InstalledTheme> {
        match key {
            Some(key) if self.exists(key) => self.theme(key),
            Some(key) => {
                log::debug!(
                    "Theme '{key}' not installed, using default '{}'",
                    self.default_theme
                );
                self.theme(&self.default_theme)
            }
            None => self.theme(&self.default_theme),
        }
    }

    /// Pack an installed theme into `<cache>/themes/<key>.zip`.
    pub fn export(&self, theme: &str) -> ThemeResult<PathBuf> {
        let dir = self.theme_dir(theme)?;
        let zip_path = self
            .paths
            .system_path(PathKind::Cache, true)
            .join("themes")
            .join(format!("{theme}.zip"));

        let files = archive::pack_directory(&dir, &zip_path)?;
        log::info!(
            "Exported theme '{theme}' ({files} files) to {}",
            zip_path.display()
        );
        Ok(zip_path)
    }

    pub(crate) fn read_manifest(&self, theme_dir: &Path) -> ThemeResult<ThemeManifest> {
        let content = self.fs.read_file(&theme_dir.join(MANIFEST_FILE))?;
        ThemeManifest::parse(&content)
    }
}
