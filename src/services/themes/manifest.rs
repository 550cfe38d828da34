use crate::types::errors::{ThemeError, ThemeResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// File at the root of every theme holding its metadata.
pub const MANIFEST_FILE: &str = "config.json";

/// Parsed `config.json` of a theme.
///
/// Keys this crate does not model are kept in `extra` so a rewrite never
/// drops them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ThemeManifest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "authorUrl", default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An explicit `null` reads the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ThemeManifest {
    pub fn parse(json: &str) -> ThemeResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ThemeError::Manifest(format!("Failed to parse {MANIFEST_FILE}: {e}")))
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f.eq_ignore_ascii_case(feature))
    }

    /// Template every declared feature requires, e.g. `html/page.html.twig`.
    pub fn feature_templates(&self) -> Vec<String> {
        self.features
            .iter()
            .map(|f| format!("html/{}.html.twig", f.to_lowercase()))
            .collect()
    }
}

/// Replace the `"name"` field of a manifest document.
///
/// Every other key is kept, in its original position. Output is compact JSON.
pub fn rename_manifest(json: &str, new_name: &str) -> ThemeResult<String> {
    let mut value: Value = serde_json::from_str(json)
        .map_err(|e| ThemeError::Manifest(format!("Failed to parse {MANIFEST_FILE}: {e}")))?;

    let object = value
        .as_object_mut()
        .ok_or_else(|| ThemeError::Manifest(format!("{MANIFEST_FILE} is not a JSON object")))?;
    object.insert("name".to_string(), Value::String(new_name.to_string()));

    serde_json::to_string(&value)
        .map_err(|e| ThemeError::Manifest(format!("Failed to serialize {MANIFEST_FILE}: {e}")))
}
