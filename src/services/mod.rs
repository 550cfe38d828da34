pub mod archive;
pub mod config;
pub mod fs_utils;
pub mod i18n;
pub mod paths;
pub mod themes;
