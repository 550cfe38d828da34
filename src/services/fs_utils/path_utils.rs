use std::path::{Component, Path, PathBuf};

/// Validates that the `target_path` strictly resolves _inside_ the `base_path`.
/// Rejects path traversal attempts using `..` or absolute paths aiming outside the allowed directory.
pub fn is_path_safe(base_path: &Path, target_path: &Path) -> bool {
    if target_path.is_absolute() {
        return target_path.starts_with(base_path);
    }

    let mut depth = 0;
    for component in target_path.components() {
        match component {
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            Component::Normal(_) => {
                depth += 1;
            }
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }

    true
}

/// Joins `user_path` onto `base_path`, refusing anything that would escape it.
pub fn resolve_safe_path(base_path: &Path, user_path: &str) -> std::io::Result<PathBuf> {
    let target = Path::new(user_path);
    if !is_path_safe(base_path, target) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("Path escapes {}: {user_path}", base_path.display()),
        ));
    }

    Ok(base_path.join(target))
}

/// A theme key names exactly one directory directly under the themes root.
pub fn is_valid_theme_key(key: &str) -> bool {
    let mut components = Path::new(key).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !key.starts_with('.')
}

/// Directory name for a theme display name.
///
/// `"New Theme Name"` becomes `new-theme-name`. Returns `None` when nothing
/// usable is left after sanitizing.
pub fn theme_dir_name(name: &str) -> Option<String> {
    let ascii = deunicode::deunicode(name);
    let sanitized = sanitize_filename::sanitize(&ascii);

    let mut out = String::with_capacity(sanitized.len());
    let mut pending_dash = false;
    for ch in sanitized.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}
