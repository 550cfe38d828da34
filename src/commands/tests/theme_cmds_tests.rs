use super::theme_cmds::*;
use crate::services::config::AppSettings;
use crate::services::themes::ThemeService;
use crate::types::errors::CommandError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn state_for(root: &Path) -> ThemeState {
    crate::test_utils::init_test_logger();
    let settings = AppSettings {
        root_dir: root.to_path_buf(),
        ..AppSettings::default()
    };
    ThemeState::new(ThemeService::from_settings(&settings))
}

fn write_zip(path: &Path, files: &[(&str, &[u8])]) {
    let file = fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, content) in files {
        writer.start_file(name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn test_install_list_copy_resolve_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let state = state_for(tmp.path());
    let zip = tmp.path().join("meadow.zip");
    write_zip(
        &zip,
        &[
            ("config.json", br#"{"name":"Meadow","features":["page"]}"#),
            ("html/message.html.twig", b"msg"),
            ("html/page.html.twig", b"page"),
        ],
    );

    let installed = install_theme_cmd(&state, zip.to_string_lossy().to_string()).unwrap();
    assert_eq!(installed.theme, "meadow");

    let copied = copy_theme_cmd(
        &state,
        "meadow".to_string(),
        "Meadow Night".to_string(),
        None,
    )
    .unwrap();
    assert!(copied.path.ends_with("meadow-night"));

    let names: Vec<String> = list_themes_cmd(&state, Some("page".to_string()))
        .unwrap()
        .into_iter()
        .map(|t| t.manifest.name)
        .collect();
    assert_eq!(names, vec!["Meadow".to_string(), "Meadow Night".to_string()]);

    let resolution = resolve_template_cmd(&state, ":meadow-night:page.html.twig".to_string()).unwrap();
    assert_eq!(resolution.resolved, ":meadow-night:page.html.twig");

    // Default theme "blank" is not installed, so the fallback finds "meadow"
    let resolution = resolve_template_cmd(&state, ":ghost:page.html.twig".to_string()).unwrap();
    assert_eq!(resolution.resolved, ":meadow:page.html.twig");

    validate_theme_cmd(&state, "meadow-night".to_string()).unwrap();
    rename_theme_cmd(&state, "meadow-night".to_string(), "Dusk".to_string()).unwrap();
    let exported = export_theme_cmd(&state, "meadow-night".to_string()).unwrap();
    assert!(Path::new(&exported).exists());

    delete_theme_cmd(&state, "meadow-night".to_string()).unwrap();
    assert_eq!(list_themes_cmd(&state, None).unwrap().len(), 1);
}

#[test]
fn test_command_errors_serialize_as_strings() {
    let tmp = TempDir::new().unwrap();
    let state = state_for(tmp.path());

    let err = delete_theme_cmd(&state, "ghost".to_string()).unwrap_err();
    assert!(matches!(err, CommandError::NotFound(_)));
    assert_eq!(
        serde_json::to_string(&err).unwrap(),
        "\"Not found: Theme ghost was not found.\""
    );

    let err = delete_theme_cmd(&state, "blank".to_string()).unwrap_err();
    assert!(matches!(err, CommandError::Validation(ref m) if m.contains("cannot be deleted")));
}

#[test]
fn test_install_missing_files_surfaces_list() {
    let tmp = TempDir::new().unwrap();
    let state = state_for(tmp.path());
    let zip = tmp.path().join("thin.zip");
    write_zip(&zip, &[("config.json", br#"{"name":"Thin"}"#)]);

    let err = install_theme_cmd(&state, zip.to_string_lossy().to_string()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation error: Required files are missing: html/message.html.twig"
    );
}
