use super::manifest::{rename_manifest, MANIFEST_FILE};
use super::ThemeService;
use crate::services::fs_utils::path_utils::{is_valid_theme_key, theme_dir_name};
use crate::services::i18n::{MSG_CANNOT_DELETE, MSG_THEME_EXISTS, MSG_THEME_NOT_FOUND};
use crate::types::errors::{ThemeError, ThemeResult};
use std::path::{Path, PathBuf};

impl ThemeService {
    /// Duplicate the installed theme `origin` as a new theme called `new_name`.
    ///
    /// The new directory is named after `new_dir_name` when given, otherwise
    /// after `new_name`, in both cases passed through `theme_dir_name`.
    /// Returns the new theme's directory.
    pub fn copy(
        &self,
        origin: &str,
        new_name: &str,
        new_dir_name: Option<&str>,
    ) -> ThemeResult<PathBuf> {
        let root = self.themes_root();

        let requested = new_dir_name.unwrap_or(new_name);
        let dir_name = theme_dir_name(requested)
            .ok_or_else(|| ThemeError::InvalidName(requested.to_string()))?;

        let target = root.join(&dir_name);
        if self.fs.exists(&target) {
            return Err(ThemeError::AlreadyExists(
                self.trans(MSG_THEME_EXISTS, &[("%name%", dir_name)]),
            ));
        }

        let installed = self.fs.list_dirs(&root)?;
        if !installed.iter().any(|dir| dir == origin) {
            return Err(self.not_found(origin));
        }

        self.fs.mirror(&root.join(origin), &target)?;
        self.update_manifest_name(&target, new_name)?;

        log::info!("Copied theme '{origin}' to '{}'", target.display());
        Ok(target)
    }

    /// Change the display name of an installed theme. Its directory stays put.
    pub fn rename(&self, theme: &str, new_name: &str) -> ThemeResult<()> {
        let dir = self.theme_dir(theme)?;
        self.update_manifest_name(&dir, new_name)?;
        log::info!("Renamed theme '{theme}' to \"{new_name}\"");
        Ok(())
    }

    /// Remove an installed theme. Bundled themes cannot be deleted.
    pub fn delete(&self, theme: &str) -> ThemeResult<()> {
        if self.is_protected(theme) {
            return Err(ThemeError::Protected(
                self.trans(MSG_CANNOT_DELETE, &[("%name%", theme.to_string())]),
            ));
        }

        let dir = self.theme_dir(theme)?;
        self.fs.remove(&dir)?;
        log::info!("Deleted theme '{theme}'");
        Ok(())
    }

    /// Directory of an existing theme.
    pub(crate) fn theme_dir(&self, theme: &str) -> ThemeResult<PathBuf> {
        if !is_valid_theme_key(theme) {
            return Err(ThemeError::InvalidName(theme.to_string()));
        }

        let dir = self.themes_root().join(theme);
        if !self.fs.exists(&dir) {
            return Err(self.not_found(theme));
        }
        Ok(dir)
    }

    pub(crate) fn not_found(&self, theme: &str) -> ThemeError {
        ThemeError::NotFound(self.trans(MSG_THEME_NOT_FOUND, &[("%name%", theme.to_string())]))
    }

    fn update_manifest_name(&self, theme_dir: &Path, new_name: &str) -> ThemeResult<()> {
        let manifest_path = theme_dir.join(MANIFEST_FILE);
        let current = self.fs.read_file(&manifest_path)?;
        let updated = rename_manifest(&current, new_name)?;
        self.fs.dump_file(&manifest_path, &updated)?;
        Ok(())
    }
}
