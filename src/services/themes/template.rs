//! Template references and the fallback lookup across themes.

use super::ThemeService;
use crate::services::paths::{PathKind, PathsProvider};
use crate::types::errors::{ThemeError, ThemeResult};
use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

pub const ENGINE_TWIG: &str = "twig";
pub const ENGINE_PHP: &str = "php";

static TEMPLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^:]*):([^:]*):([^:/]+?)\.([^.:/]+)(?:\.([^.:/]+))?$")
        .expect("valid template name regex")
});

/// A template name of the form `bundle:controller:name.format[.engine]`.
///
/// Theme templates have an empty bundle and carry the theme key in
/// `controller`, e.g. `:goldstar:page.html.twig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateReference {
    pub bundle: String,
    pub controller: String,
    pub name: String,
    pub format: String,
    pub engine: Option<String>,
}

impl TemplateReference {
    pub fn parse(logical_name: &str) -> ThemeResult<Self> {
        let caps = TEMPLATE_RE.captures(logical_name).ok_or_else(|| {
            ThemeError::InvalidName(format!("Malformed template name: {logical_name}"))
        })?;

        Ok(Self {
            bundle: caps[1].to_string(),
            controller: caps[2].to_string(),
            name: caps[3].to_string(),
            format: caps[4].to_string(),
            engine: caps.get(5).map(|m| m.as_str().to_string()),
        })
    }

    pub fn with_engine(&self, engine: &str) -> Self {
        Self {
            engine: Some(engine.to_string()),
            ..self.clone()
        }
    }

    pub fn with_controller(&self, controller: &str) -> Self {
        Self {
            controller: controller.to_string(),
            ..self.clone()
        }
    }

    pub fn is_theme_template(&self) -> bool {
        self.bundle.is_empty()
    }

    /// `name.format[.engine]`
    pub fn file_name(&self) -> String {
        match &self.engine {
            Some(engine) => format!("{}.{}.{}", self.name, self.format, engine),
            None => format!("{}.{}", self.name, self.format),
        }
    }

    pub fn logical_name(&self) -> String {
        format!("{}:{}:{}", self.bundle, self.controller, self.file_name())
    }
}

impl fmt::Display for TemplateReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.logical_name())
    }
}

/// Answers whether a template can be rendered.
pub trait TemplateProbe: Send + Sync {
    fn exists(&self, template: &TemplateReference) -> bool;
}

/// `TemplateProbe` that looks for template files on disk.
///
/// Theme templates resolve to `<themes>/<controller>/html/<file>`, bundle
/// templates to `<root>/<bundle>/<controller>/<file>`.
#[derive(Debug, Clone)]
pub struct FsTemplateProbe {
    themes_dir: PathBuf,
    root_dir: PathBuf,
}

impl FsTemplateProbe {
    pub fn new(themes_dir: PathBuf, root_dir: PathBuf) -> Self {
        Self {
            themes_dir,
            root_dir,
        }
    }

    pub fn from_paths(paths: &dyn PathsProvider) -> Self {
        Self::new(
            paths.system_path(PathKind::Themes, true),
            paths.system_path(PathKind::ThemesRoot, true),
        )
    }

    pub fn resolve(&self, template: &TemplateReference) -> PathBuf {
        if template.is_theme_template() {
            self.themes_dir
                .join(&template.controller)
                .join("html")
                .join(template.file_name())
        } else {
            self.root_dir
                .join(&template.bundle)
                .join(&template.controller)
                .join(template.file_name())
        }
    }
}

impl TemplateProbe for FsTemplateProbe {
    fn exists(&self, template: &TemplateReference) -> bool {
        self.resolve(template).is_file()
    }
}

impl ThemeService {
    /// Resolve `template` to the logical name of a template that exists.
    ///
    /// Candidates, in order: the requested theme as twig, the requested
    /// theme as php, the default theme as twig, then every other installed
    /// theme as twig. When nothing matches the requested twig name is
    /// returned unchanged.
    pub fn check_for_twig_template(&self, template: &str) -> ThemeResult<String> {
        let requested = TemplateReference::parse(template)?;
        let twig = requested.with_engine(ENGINE_TWIG);

        if self.templates.exists(&twig) {
            return Ok(twig.logical_name());
        }

        let php = requested.with_engine(ENGINE_PHP);
        if self.templates.exists(&php) {
            return Ok(php.logical_name());
        }

        if let Some(found) = self.find_theme_with_template(&twig) {
            return Ok(found.logical_name());
        }

        log::debug!("No theme provides {twig}, keeping requested name");
        Ok(twig.logical_name())
    }

    fn find_theme_with_template(&self, twig: &TemplateReference) -> Option<TemplateReference> {
        let requested_theme = twig.controller.as_str();
        let default_theme = self.default_theme.as_str();

        if requested_theme != default_theme {
            let candidate = twig.with_controller(default_theme);
            if self.templates.exists(&candidate) {
                log::debug!("Falling back to default theme for {twig}");
                return Some(candidate);
            }
        }

        let installed = match self.installed_theme_keys() {
            Ok(keys) => keys,
            Err(e) => {
                log::warn!("Could not list installed themes for fallback: {e}");
                return None;
            }
        };

        installed
            .iter()
            .filter(|key| key.as_str() != default_theme && key.as_str() != requested_theme)
            .map(|key| twig.with_controller(key))
            .find(|candidate| self.templates.exists(candidate))
            .inspect(|candidate| log::debug!("Falling back to {candidate} for {twig}"))
    }
}
