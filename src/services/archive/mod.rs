//! Zip handling for theme packages: scanning, selective extraction and
//! packing a theme directory back into an archive.

mod extract;
mod pack;
mod scan;
mod types;

pub use extract::extract_entries;
pub use pack::pack_directory;
pub use scan::{entry_extension, scan_archive};
pub use types::ArchiveScan;

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod tests;
