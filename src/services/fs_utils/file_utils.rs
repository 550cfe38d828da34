use std::fs;
use std::io;
use std::path::Path;

/// Filesystem operations the theme services depend on.
///
/// Kept behind a trait so the services can run against a fake in tests.
pub trait Filesystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    /// Copy a single file, creating the destination's parent directories.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Recursively copy the contents of `origin` into `target`,
    /// overwriting files that already exist there.
    fn mirror(&self, origin: &Path, target: &Path) -> io::Result<()>;

    fn read_file(&self, path: &Path) -> io::Result<String>;

    /// Write `content` to `path`, creating parent directories as needed.
    fn dump_file(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Remove a file or a whole directory tree. Missing paths are not an error.
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Names of the immediate, non-hidden subdirectories of `root`, sorted.
    fn list_dirs(&self, root: &Path) -> io::Result<Vec<String>>;
}

/// `Filesystem` backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(from, to).map(|_| ())
    }

    fn mirror(&self, origin: &Path, target: &Path) -> io::Result<()> {
        if !origin.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Source directory does not exist: {}", origin.display()),
            ));
        }

        fs::create_dir_all(target)?;

        let mut options = fs_extra::dir::CopyOptions::new();
        options.content_only = true;
        options.overwrite = true;

        fs_extra::dir::copy(origin, target, &options)
            .map(|_| ())
            .map_err(|err| io::Error::other(err.to_string()))
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn dump_file(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        if !path.exists() {
            return Ok(());
        }
        if path.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }

    fn list_dirs(&self, root: &Path) -> io::Result<Vec<String>> {
        let mut dirs: Vec<String> = fs::read_dir(root)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|name| !name.starts_with('.'))
            .collect();
        dirs.sort();
        Ok(dirs)
    }
}

/// Tries to rename a file or directory using `std::fs::rename`.
/// If it fails (likely due to cross-device link errors), it falls back
/// to using `fs_extra` to copy and remove the original.
pub fn rename_cross_drive_fallback(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::warn!(
                "fs::rename failed (cross-device?): {}. Attempting fallback move...",
                e
            );

            if !from.exists() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    "Source path does not exist",
                ));
            }

            if to.exists() {
                return Err(e);
            }

            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent)?;
            }

            if from.is_dir() {
                let mut options = fs_extra::dir::CopyOptions::new();
                options.content_only = true;

                fs_extra::dir::move_dir(from, to, &options)
                    .map(|_| ())
                    .map_err(|err| io::Error::other(err.to_string()))
            } else {
                let mut options = fs_extra::file::CopyOptions::new();
                options.overwrite = false;

                fs_extra::file::move_file(from, to, &options)
                    .map(|_| ())
                    .map_err(|err| io::Error::other(err.to_string()))
            }
        }
    }
}

/// Moves the directory `source` to `target`, replacing whatever is there.
///
/// An existing `target` is first renamed to a hidden sibling and only
/// deleted once the move succeeded; if the move fails it is put back.
pub fn replace_dir(source: &Path, target: &Path) -> io::Result<()> {
    if !target.exists() {
        return rename_cross_drive_fallback(source, target);
    }

    let file_name = target
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let backup = target.with_file_name(format!(".{file_name}.previous"));
    if backup.exists() {
        fs::remove_dir_all(&backup)?;
    }
    fs::rename(target, &backup)?;

    match rename_cross_drive_fallback(source, target) {
        Ok(()) => {
            if let Err(e) = fs::remove_dir_all(&backup) {
                log::warn!("Failed to remove {}: {e}", backup.display());
            }
            Ok(())
        }
        Err(e) => {
            log::warn!(
                "Moving {} into place failed, restoring previous {}",
                source.display(),
                target.display()
            );
            if target.exists() {
                fs::remove_dir_all(target)?;
            }
            if let Err(restore) = fs::rename(&backup, target) {
                log::error!(
                    "Could not restore {}; previous contents kept at {}: {restore}",
                    target.display(),
                    backup.display()
                );
            }
            Err(e)
        }
    }
}
