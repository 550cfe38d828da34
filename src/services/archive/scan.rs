use super::types::ArchiveScan;
use crate::services::fs_utils::path_utils::is_path_safe;
use crate::types::errors::ThemeResult;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Lowercased extension of an archive entry name.
///
/// Unlike `Path::extension`, a leading dot counts, so `.htaccess` yields
/// `htaccess` and gets filtered like any other extension.
pub fn entry_extension(entry: &str) -> Option<String> {
    let file_name = entry.rsplit('/').next().unwrap_or(entry);
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

pub(super) fn normalize_entry_name(raw: &str) -> &str {
    raw.strip_prefix('/').unwrap_or(raw)
}

/// Entry names must stay relative and never climb above the extraction root.
fn is_safe_entry(name: &str) -> bool {
    let path = Path::new(name);
    !path.has_root() && is_path_safe(Path::new("."), path)
}

/// List the entries of `zip_path`, classify them against
/// `allowed_extensions` and read `manifest_name` if the archive has it.
pub fn scan_archive(
    zip_path: &Path,
    allowed_extensions: &[String],
    manifest_name: &str,
) -> ThemeResult<ArchiveScan> {
    let file = fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut scan = ArchiveScan::default();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = normalize_entry_name(entry.name()).to_string();
        if name.is_empty() {
            continue;
        }

        if !is_safe_entry(&name) {
            log::warn!("Skipping unsafe entry in {}: {name}", zip_path.display());
            scan.rejected.push(name.clone());
            scan.entries.push(name);
            continue;
        }

        let allowed = match entry_extension(&name) {
            None => true,
            Some(ext) => allowed_extensions
                .iter()
                .any(|a| a.eq_ignore_ascii_case(&ext)),
        };

        if name == manifest_name && !entry.is_dir() {
            let mut content = String::new();
            match entry.read_to_string(&mut content) {
                Ok(_) => scan.manifest = Some(content),
                Err(e) => log::warn!("Unreadable {manifest_name} in archive: {e}"),
            }
        }

        if allowed {
            scan.allowed.push(name.clone());
        } else {
            log::debug!("Rejecting entry with disallowed extension: {name}");
            scan.rejected.push(name.clone());
        }
        scan.entries.push(name);
    }

    Ok(scan)
}
