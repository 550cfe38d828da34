use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Themes shipped with the application. They can be copied but never
/// overwritten by an upload or deleted.
pub const BUNDLED_THEMES: &[&str] = &[
    "aurora",
    "blank",
    "brienz",
    "cards",
    "confirmme",
    "fresh-center",
    "fresh-fixed",
    "fresh-left",
    "fresh-wide",
    "goldstar",
    "nature",
    "neopolitan",
    "oxygen",
    "paprika",
    "skyline",
    "sparse",
    "sunday",
    "system",
    "vibrant",
];

/// File extensions accepted when importing a theme package.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[
    "json", "twig", "css", "js", "htm", "html", "txt", "jpg", "jpeg", "png", "gif",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Application root. Template lookups outside a theme resolve against it.
    pub root_dir: PathBuf,
    /// Themes directory, relative to `root_dir`.
    pub themes_dir: PathBuf,
    /// Cache directory, relative to `root_dir`. Exported packages land here.
    pub cache_dir: PathBuf,
    pub default_theme: String,
    pub protected_themes: Vec<String>,
    pub allowed_extensions: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            themes_dir: PathBuf::from("themes"),
            cache_dir: PathBuf::from("var/cache"),
            default_theme: "blank".into(),
            protected_themes: BUNDLED_THEMES.iter().map(|t| t.to_string()).collect(),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl AppSettings {
    /// Absolute (root-joined) themes directory.
    pub fn themes_path(&self) -> PathBuf {
        self.root_dir.join(&self.themes_dir)
    }
}
