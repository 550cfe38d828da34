#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use themekit_lib::AppSettings;
use zip::write::SimpleFileOptions;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Settings rooted at `root` with the stock themes/cache layout.
pub fn settings_in(root: &Path) -> AppSettings {
    AppSettings {
        root_dir: root.to_path_buf(),
        ..AppSettings::default()
    }
}

/// Write a zip at `dir/<name>.zip` holding `entries` as (path, content).
pub fn build_theme_zip(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(format!("{name}.zip"));
    let file = File::create(&path).expect("create zip");
    let mut zip = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (entry, content) in entries {
        zip.start_file(*entry, options).expect("start entry");
        zip.write_all(content.as_bytes()).expect("write entry");
    }
    zip.finish().expect("finish zip");
    path
}

pub fn complete_theme_entries<'a>(manifest: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("config.json", manifest),
        ("html/message.html.twig", "{{ message }}"),
        ("html/page.html.twig", "{% block content %}{% endblock %}"),
        ("html/base.html.twig", "<html></html>"),
        ("css/theme.css", "body {}"),
    ]
}
