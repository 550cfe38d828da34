//! User-facing message translation.

use std::collections::HashMap;

pub const DOMAIN_VALIDATORS: &str = "validators";

pub const MSG_MISSING_FILES: &str = "themekit.theme.missing.files";
pub const MSG_THEME_NOT_FOUND: &str = "themekit.theme.not.found";
pub const MSG_ARCHIVE_NOT_FOUND: &str = "themekit.theme.archive.not.found";
pub const MSG_ARCHIVE_INVALID: &str = "themekit.theme.archive.invalid";
pub const MSG_THEME_EXISTS: &str = "themekit.theme.exists";
pub const MSG_CANNOT_OVERWRITE: &str = "themekit.theme.default.cannot.overwrite";
pub const MSG_CANNOT_DELETE: &str = "themekit.theme.default.cannot.delete";

pub trait Translator: Send + Sync {
    /// Translate message `key` from `domain`, substituting each
    /// `(placeholder, value)` pair. Placeholders are written `%name%`.
    fn trans(&self, key: &str, params: &[(&str, String)], domain: &str) -> String;
}

/// Built-in English catalog.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: HashMap<(String, String), String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let mut catalog = Self {
            messages: HashMap::new(),
        };
        let v = DOMAIN_VALIDATORS;
        catalog.add(v, MSG_MISSING_FILES, "Required files are missing: %files%");
        catalog.add(v, MSG_THEME_NOT_FOUND, "Theme %name% was not found.");
        catalog.add(v, MSG_ARCHIVE_NOT_FOUND, "Theme package %path% does not exist.");
        catalog.add(
            v,
            MSG_ARCHIVE_INVALID,
            "Theme package %path% could not be read: %error%",
        );
        catalog.add(v, MSG_THEME_EXISTS, "A theme named %name% already exists.");
        catalog.add(
            v,
            MSG_CANNOT_OVERWRITE,
            "%name% is a default theme and cannot be overwritten.",
        );
        catalog.add(
            v,
            MSG_CANNOT_DELETE,
            "%name% is a default theme and cannot be deleted.",
        );
        catalog
    }
}

impl MessageCatalog {
    pub fn add(&mut self, domain: &str, key: &str, message: &str) {
        self.messages
            .insert((domain.to_string(), key.to_string()), message.to_string());
    }
}

impl Translator for MessageCatalog {
    fn trans(&self, key: &str, params: &[(&str, String)], domain: &str) -> String {
        let Some(template) = self.messages.get(&(domain.to_string(), key.to_string())) else {
            log::debug!("No translation for {domain}:{key}");
            return key.to_string();
        };

        params
            .iter()
            .fold(template.clone(), |acc, (placeholder, value)| {
                acc.replace(placeholder, value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_substituted() {
        let catalog = MessageCatalog::default();
        let msg = catalog.trans(
            MSG_MISSING_FILES,
            &[("%files%", "config.json, html/page.html.twig".to_string())],
            DOMAIN_VALIDATORS,
        );
        assert_eq!(
            msg,
            "Required files are missing: config.json, html/page.html.twig"
        );
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let catalog = MessageCatalog::default();
        assert_eq!(catalog.trans("nope.key", &[], DOMAIN_VALIDATORS), "nope.key");
    }

    #[test]
    fn test_domain_is_part_of_lookup() {
        let catalog = MessageCatalog::default();
        assert_eq!(
            catalog.trans(MSG_THEME_EXISTS, &[], "messages"),
            MSG_THEME_EXISTS
        );
    }

    #[test]
    fn test_custom_messages_override() {
        let mut catalog = MessageCatalog::default();
        catalog.add(DOMAIN_VALIDATORS, MSG_THEME_EXISTS, "Ya existe %name%.");
        let msg = catalog.trans(
            MSG_THEME_EXISTS,
            &[("%name%", "neo".to_string())],
            DOMAIN_VALIDATORS,
        );
        assert_eq!(msg, "Ya existe neo.");
    }
}
