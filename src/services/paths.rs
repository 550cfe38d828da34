//! Resolution of the well-known application directories.

use crate::services::config::AppSettings;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Directory holding one subdirectory per installed theme.
    Themes,
    /// Application root that template references resolve against.
    ThemesRoot,
    Cache,
}

pub trait PathsProvider: Send + Sync {
    /// Path of a well-known directory. With `absolute` the path is joined
    /// onto the application root, otherwise the configured relative form
    /// is returned.
    fn system_path(&self, kind: PathKind, absolute: bool) -> PathBuf;
}

/// `PathsProvider` backed by `AppSettings`.
#[derive(Debug, Clone)]
pub struct SystemPaths {
    root_dir: PathBuf,
    themes_dir: PathBuf,
    cache_dir: PathBuf,
}

impl SystemPaths {
    pub fn new(root_dir: PathBuf, themes_dir: PathBuf, cache_dir: PathBuf) -> Self {
        Self {
            root_dir,
            themes_dir,
            cache_dir,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            settings.root_dir.clone(),
            settings.themes_dir.clone(),
            settings.cache_dir.clone(),
        )
    }
}

impl PathsProvider for SystemPaths {
    fn system_path(&self, kind: PathKind, absolute: bool) -> PathBuf {
        let relative = match kind {
            PathKind::Themes => self.themes_dir.clone(),
            PathKind::ThemesRoot => PathBuf::from("."),
            PathKind::Cache => self.cache_dir.clone(),
        };

        if !absolute {
            return relative;
        }

        match kind {
            PathKind::ThemesRoot => self.root_dir.clone(),
            _ if relative.is_absolute() => relative,
            _ => self.root_dir.join(relative),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn paths() -> SystemPaths {
        SystemPaths::new(
            PathBuf::from("/srv/app"),
            PathBuf::from("themes"),
            PathBuf::from("var/cache"),
        )
    }

    #[test]
    fn test_absolute_paths_join_root() {
        let p = paths();
        assert_eq!(
            p.system_path(PathKind::Themes, true),
            Path::new("/srv/app/themes")
        );
        assert_eq!(
            p.system_path(PathKind::Cache, true),
            Path::new("/srv/app/var/cache")
        );
        assert_eq!(p.system_path(PathKind::ThemesRoot, true), Path::new("/srv/app"));
    }

    #[test]
    fn test_relative_paths_are_returned_as_configured() {
        let p = paths();
        assert_eq!(p.system_path(PathKind::Themes, false), Path::new("themes"));
        assert_eq!(p.system_path(PathKind::ThemesRoot, false), Path::new("."));
    }

    #[test]
    fn test_absolute_themes_dir_is_kept() {
        let p = SystemPaths::new(
            PathBuf::from("/srv/app"),
            PathBuf::from("/data/themes"),
            PathBuf::from("var/cache"),
        );
        assert_eq!(
            p.system_path(PathKind::Themes, true),
            Path::new("/data/themes")
        );
    }

    #[test]
    fn test_from_settings_uses_configured_dirs() {
        let settings = AppSettings {
            root_dir: PathBuf::from("/opt/site"),
            ..AppSettings::default()
        };
        let p = SystemPaths::from_settings(&settings);
        assert_eq!(p.system_path(PathKind::Themes, true), settings.themes_path());
    }
}
