use super::manifest::{ThemeManifest, MANIFEST_FILE};
use super::ThemeService;
use crate::services::archive::{self, ArchiveScan};
use crate::services::fs_utils::file_utils::replace_dir;
use crate::services::fs_utils::path_utils::is_valid_theme_key;
use crate::services::i18n::{MSG_ARCHIVE_INVALID, MSG_ARCHIVE_NOT_FOUND, MSG_CANNOT_OVERWRITE};
use crate::types::errors::{ThemeError, ThemeResult};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Files every theme must ship, on top of one template per declared feature.
pub const REQUIRED_FILES: &[&str] = &[MANIFEST_FILE, "html/message.html.twig"];

const STAGING_PREFIX: &str = ".install-";

#[derive(Debug, Clone, Serialize)]
pub struct InstallResult {
    pub theme: String,
    pub path: String,
    pub files_extracted: usize,
    /// Entries left out because of their extension or path.
    pub skipped: Vec<String>,
}

/// Theme key for a package: its file name minus a trailing `.zip`.
pub(crate) fn theme_key_for_archive(zip_path: &Path) -> String {
    let file_name = zip_path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    match file_name.strip_suffix(".zip") {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}

/// Required files absent from `scan`, in the order they are required.
///
/// Base files count when the archive has them at all; feature templates
/// only when they would actually be extracted.
pub(crate) fn missing_files(scan: &ArchiveScan, manifest: Option<&ThemeManifest>) -> Vec<String> {
    let base = REQUIRED_FILES
        .iter()
        .filter(|f| !scan.contains(f))
        .map(|f| f.to_string());

    let features = manifest
        .map(ThemeManifest::feature_templates)
        .unwrap_or_default()
        .into_iter()
        .filter(|f| !scan.is_allowed(f));

    let mut missing: Vec<String> = Vec::new();
    for file in base.chain(features) {
        if !missing.contains(&file) {
            missing.push(file);
        }
    }
    missing
}

impl ThemeService {
    /// Install the theme package at `zip_path`.
    ///
    /// The theme key is the archive's file name without `.zip`. The package
    /// is validated before anything touches the themes directory;
    /// whitelisted entries are then extracted to a staging directory that
    /// replaces any previous install of the same key. The archive is deleted
    /// on success.
    pub fn install(&self, zip_path: &Path) -> ThemeResult<InstallResult> {
        if !self.fs.exists(zip_path) {
            return Err(ThemeError::NotFound(self.trans(
                MSG_ARCHIVE_NOT_FOUND,
                &[("%path%", zip_path.display().to_string())],
            )));
        }

        let key = theme_key_for_archive(zip_path);
        if !is_valid_theme_key(&key) {
            return Err(ThemeError::InvalidName(key));
        }

        if self.is_protected(&key) {
            return Err(ThemeError::Protected(
                self.trans(MSG_CANNOT_OVERWRITE, &[("%name%", key)]),
            ));
        }

        let scan = archive::scan_archive(zip_path, &self.allowed_extensions, MANIFEST_FILE)
            .map_err(|e| match e {
                ThemeError::Archive(error) => ThemeError::Archive(self.trans(
                    MSG_ARCHIVE_INVALID,
                    &[
                        ("%path%", zip_path.display().to_string()),
                        ("%error%", error),
                    ],
                )),
                other => other,
            })?;

        let manifest = scan
            .manifest
            .as_deref()
            .map(ThemeManifest::parse)
            .transpose()?;

        let missing = missing_files(&scan, manifest.as_ref());
        if !missing.is_empty() {
            log::warn!(
                "Theme package {} is missing: {}",
                zip_path.display(),
                missing.join(", ")
            );
            return Err(self.missing_files_error(missing));
        }

        let root = self.themes_root();
        fs::create_dir_all(&root)?;

        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&root)?;
        let files_extracted = archive::extract_entries(zip_path, staging.path(), &scan.allowed)?;

        let target = root.join(&key);
        if self.fs.exists(&target) {
            log::info!("Replacing installed theme '{key}'");
        }
        replace_dir(staging.path(), &target)?;

        if let Err(e) = self.fs.remove(zip_path) {
            log::warn!(
                "Installed '{key}' but failed to remove {}: {e}",
                zip_path.display()
            );
        }

        log::info!(
            "Installed theme '{key}' ({files_extracted} files, {} skipped)",
            scan.rejected.len()
        );

        Ok(InstallResult {
            theme: key,
            path: target.to_string_lossy().to_string(),
            files_extracted,
            skipped: scan.rejected,
        })
    }

    /// Check that the installed theme `theme` still has its required files.
    pub fn validate(&self, theme: &str) -> ThemeResult<()> {
        let dir = self.theme_dir(theme)?;
        // A missing manifest is reported below; an unreadable one is an error.
        let manifest = if self.fs.exists(&dir.join(MANIFEST_FILE)) {
            Some(self.read_manifest(&dir)?)
        } else {
            None
        };

        let required = REQUIRED_FILES
            .iter()
            .map(|f| f.to_string())
            .chain(
                manifest
                    .as_ref()
                    .map(ThemeManifest::feature_templates)
                    .unwrap_or_default(),
            );

        let mut missing: Vec<String> = Vec::new();
        for file in required {
            if !self.fs.exists(&dir.join(&file)) && !missing.contains(&file) {
                missing.push(file);
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(self.missing_files_error(missing))
        }
    }
}
