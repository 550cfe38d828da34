use serde::Serialize;

/// Inventory of a zip archive taken before anything is extracted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArchiveScan {
    /// Every entry name, leading `/` stripped, in archive order.
    pub entries: Vec<String>,
    /// Entries whose extension is whitelisted (or that have none).
    pub allowed: Vec<String>,
    /// Entries skipped because of their extension or an unsafe path.
    pub rejected: Vec<String>,
    /// Raw contents of the requested manifest entry, if present.
    pub manifest: Option<String>,
}

impl ArchiveScan {
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    pub fn is_allowed(&self, entry: &str) -> bool {
        self.allowed.iter().any(|e| e == entry)
    }
}
