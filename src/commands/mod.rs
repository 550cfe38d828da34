pub mod settings_cmds;
pub mod theme_cmds;

#[cfg(test)]
#[path = "tests/theme_cmds_tests.rs"]
mod theme_cmds_tests;
