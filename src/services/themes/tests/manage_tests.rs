use super::fakes::*;
use super::*;
use crate::services::fs_utils::LocalFilesystem;
use crate::types::errors::ThemeError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn fake_fs_service(fake: &FakeFs) -> ThemeService {
    ThemeService::new(
        FixedPaths::new("/path/to"),
        NoTemplates,
        RecordingTranslator::default(),
        fake.clone(),
        &AppSettings::default(),
    )
}

fn origin_fs(missing: &str) -> FakeFs {
    FakeFs {
        missing: vec![PathBuf::from(missing)],
        dirs: vec!["origin-template-dir".to_string()],
        file_content: r#"{"name":"Origin Theme"}"#.to_string(),
        ..FakeFs::default()
    }
}

#[test]
fn test_copy_with_no_new_dir_name() {
    let fake = origin_fs("/path/to/themes/new-theme-name");
    let svc = fake_fs_service(&fake);

    let target = svc
        .copy("origin-template-dir", "New Theme Name", None)
        .unwrap();

    assert_eq!(target, Path::new("/path/to/themes/new-theme-name"));
    assert_eq!(
        fake.mirrored(),
        vec![(
            PathBuf::from("/path/to/themes/origin-template-dir"),
            PathBuf::from("/path/to/themes/new-theme-name"),
        )]
    );
    assert_eq!(
        fake.dumped(),
        vec![(
            PathBuf::from("/path/to/themes/new-theme-name/config.json"),
            r#"{"name":"New Theme Name"}"#.to_string(),
        )]
    );
}

#[test]
fn test_copy_with_new_dir_name() {
    let fake = origin_fs("/path/to/themes/requested-theme-dir");
    let svc = fake_fs_service(&fake);

    svc.copy(
        "origin-template-dir",
        "New Theme Name",
        Some("requested-theme-dir"),
    )
    .unwrap();

    assert_eq!(
        fake.mirrored(),
        vec![(
            PathBuf::from("/path/to/themes/origin-template-dir"),
            PathBuf::from("/path/to/themes/requested-theme-dir"),
        )]
    );
    assert_eq!(
        fake.dumped(),
        vec![(
            PathBuf::from("/path/to/themes/requested-theme-dir/config.json"),
            r#"{"name":"New Theme Name"}"#.to_string(),
        )]
    );
}

#[test]
fn test_copy_refuses_existing_target() {
    // Nothing is missing, so the target already exists
    let fake = FakeFs {
        dirs: vec!["origin-template-dir".to_string()],
        file_content: r#"{"name":"Origin Theme"}"#.to_string(),
        ..FakeFs::default()
    };
    let svc = fake_fs_service(&fake);

    let err = svc
        .copy("origin-template-dir", "New Theme Name", None)
        .unwrap_err();

    assert!(matches!(err, ThemeError::AlreadyExists(_)));
    assert!(fake.mirrored().is_empty());
    assert!(fake.dumped().is_empty());
}

#[test]
fn test_copy_unknown_origin() {
    let fake = origin_fs("/path/to/themes/new-theme-name");
    let svc = fake_fs_service(&fake);

    let err = svc.copy("nope", "New Theme Name", None).unwrap_err();

    assert!(matches!(err, ThemeError::NotFound(_)));
    assert!(fake.mirrored().is_empty());
}

#[test]
fn test_copy_rejects_unusable_name() {
    let fake = origin_fs("/path/to/themes/new-theme-name");
    let svc = fake_fs_service(&fake);

    let err = svc.copy("origin-template-dir", "!!!", None).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidName(_)));
}

fn write_theme(themes: &Path, key: &str, config: &str) {
    let dir = themes.join(key);
    fs::create_dir_all(dir.join("html")).unwrap();
    fs::write(dir.join("config.json"), config).unwrap();
    fs::write(dir.join("html").join("message.html.twig"), "msg").unwrap();
}

fn disk_service(root: &Path) -> ThemeService {
    ThemeService::new(
        FixedPaths::new(root),
        NoTemplates,
        RecordingTranslator::default(),
        LocalFilesystem,
        &AppSettings::default(),
    )
}

#[test]
fn test_copy_on_disk_keeps_other_manifest_keys() {
    let tmp = TempDir::new().unwrap();
    let themes = tmp.path().join("themes");
    write_theme(
        &themes,
        "origin",
        r#"{"name":"Origin","author":"Jane","features":["page"]}"#,
    );
    let svc = disk_service(tmp.path());

    let target = svc.copy("origin", "Origin Copy", None).unwrap();

    assert_eq!(target, themes.join("origin-copy"));
    assert!(target.join("html").join("message.html.twig").exists());
    assert_eq!(
        fs::read_to_string(target.join("config.json")).unwrap(),
        r#"{"name":"Origin Copy","author":"Jane","features":["page"]}"#
    );
    // Source manifest untouched
    assert!(fs::read_to_string(themes.join("origin").join("config.json"))
        .unwrap()
        .contains(r#""name":"Origin""#));
}

#[test]
fn test_rename_rewrites_name_in_place() {
    let tmp = TempDir::new().unwrap();
    let themes = tmp.path().join("themes");
    write_theme(&themes, "mine", r#"{"name":"Mine","builder":"grapes"}"#);
    let svc = disk_service(tmp.path());

    svc.rename("mine", "Still Mine").unwrap();

    assert_eq!(
        fs::read_to_string(themes.join("mine").join("config.json")).unwrap(),
        r#"{"name":"Still Mine","builder":"grapes"}"#
    );
    assert!(matches!(
        svc.rename("ghost", "x").unwrap_err(),
        ThemeError::NotFound(_)
    ));
}

#[test]
fn test_delete_removes_theme() {
    let tmp = TempDir::new().unwrap();
    let themes = tmp.path().join("themes");
    write_theme(&themes, "mine", r#"{"name":"Mine"}"#);
    let svc = disk_service(tmp.path());

    svc.delete("mine").unwrap();

    assert!(!themes.join("mine").exists());
    assert!(matches!(
        svc.delete("mine").unwrap_err(),
        ThemeError::NotFound(_)
    ));
}

#[test]
fn test_delete_refuses_bundled_theme() {
    let tmp = TempDir::new().unwrap();
    let themes = tmp.path().join("themes");
    write_theme(&themes, "blank", r#"{"name":"Blank"}"#);
    let svc = disk_service(tmp.path());

    assert!(matches!(
        svc.delete("blank").unwrap_err(),
        ThemeError::Protected(_)
    ));
    assert!(themes.join("blank").exists());
}

#[test]
fn test_delete_refuses_path_escape() {
    let fake = FakeFs::default();
    let svc = fake_fs_service(&fake);

    assert!(matches!(
        svc.delete("../etc").unwrap_err(),
        ThemeError::InvalidName(_)
    ));
    assert!(fake.removed().is_empty());
}
