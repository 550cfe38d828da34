use super::scan::normalize_entry_name;
use crate::services::fs_utils::path_utils::resolve_safe_path;
use crate::types::errors::ThemeResult;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Extract the named `entries` of `zip_path` into `dest_path`.
///
/// Entries not listed are left in the archive. Returns the number of files
/// written (directories are not counted).
pub fn extract_entries(zip_path: &Path, dest_path: &Path, entries: &[String]) -> ThemeResult<usize> {
    let wanted: HashSet<&str> = entries.iter().map(String::as_str).collect();

    let file = fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    fs::create_dir_all(dest_path)?;

    let mut count: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = normalize_entry_name(entry.name()).to_string();

        if !wanted.contains(name.as_str()) {
            continue;
        }
        let output_path = match resolve_safe_path(dest_path, &name) {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Refusing to extract unsafe entry: {e}");
                continue;
            }
        };

        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = fs::File::create(&output_path)?;
            io::copy(&mut entry, &mut outfile)?;
            count += 1;
        }
    }

    log::debug!(
        "Extracted {count} file(s) from {} into {}",
        zip_path.display(),
        dest_path.display()
    );
    Ok(count)
}
