use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use themekit_lib::commands::{settings_cmds, theme_cmds};
use themekit_lib::services::config::ConfigService;

#[derive(Debug, Parser)]
#[command(
    name = "themekit",
    about = "Install, copy and inspect site themes",
    version
)]
struct Cli {
    #[arg(
        long,
        env = "THEMEKIT_CONFIG",
        default_value = "themekit.json",
        help = "Path to the JSON settings file"
    )]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Install a theme package (.zip); the theme key is the file name.
    Install { zip: PathBuf },
    /// Duplicate an installed theme under a new name.
    Copy {
        origin: String,
        name: String,
        #[arg(long, help = "Directory name for the copy (defaults to one derived from NAME)")]
        dir: Option<String>,
    },
    /// Change the display name of an installed theme.
    Rename { theme: String, name: String },
    /// Delete an installed theme.
    Delete { theme: String },
    /// Check that an installed theme has all its required files.
    Validate { theme: String },
    /// List installed themes.
    List {
        #[arg(long, help = "Only list themes declaring this feature")]
        feature: Option<String>,
    },
    /// Pack an installed theme into a zip under the cache directory.
    Export { theme: String },
    /// Resolve a template name, falling back across themes.
    Resolve { template: String },
    /// Persist a new default theme.
    SetDefault { theme: String },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ConfigService::new(cli.config.clone());
    let state = theme_cmds::ThemeState::from_config(&config);

    let path_arg = |p: PathBuf| p.to_string_lossy().to_string();

    match cli.command {
        Command::Install { zip } => {
            print_json(&theme_cmds::install_theme_cmd(&state, path_arg(zip))?)?
        }
        Command::Copy { origin, name, dir } => {
            print_json(&theme_cmds::copy_theme_cmd(&state, origin, name, dir)?)?
        }
        Command::Rename { theme, name } => theme_cmds::rename_theme_cmd(&state, theme, name)?,
        Command::Delete { theme } => theme_cmds::delete_theme_cmd(&state, theme)?,
        Command::Validate { theme } => theme_cmds::validate_theme_cmd(&state, theme)?,
        Command::List { feature } => print_json(&theme_cmds::list_themes_cmd(&state, feature)?)?,
        Command::Export { theme } => print_json(&theme_cmds::export_theme_cmd(&state, theme)?)?,
        Command::Resolve { template } => {
            print_json(&theme_cmds::resolve_template_cmd(&state, template)?)?
        }
        Command::SetDefault { theme } => settings_cmds::set_default_theme(&config, theme)
            .with_context(|| format!("saving {}", config.config_path().display()))?,
    }

    Ok(())
}
