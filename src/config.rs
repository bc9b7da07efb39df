//! Command-line configuration
//!
//! [`Cli`] is the raw clap surface; [`Config`] is the resolved form the
//! binary hands to the rest of the crate.

use crate::ui::theme::{detect_system_scheme, Scheme};
use clap::{Parser, ValueEnum};
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "BUNCOTTY_PATH";

pub const LOG_FILE_NAME: &str = "buncotty.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    Light,
    Dark,
}

impl From<SchemeArg> for Scheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Light => Scheme::Light,
            SchemeArg::Dark => Scheme::Dark,
        }
    }
}

/// Terminal Bunco scorekeeper
#[derive(Debug, Parser)]
#[command(name = "buncotty", version, about)]
pub struct Cli {
    /// Directory holding prefs.json and the log file
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Keep preferences in memory and write no log unless --log-file is given
    #[arg(long)]
    pub ephemeral: bool,

    /// Scheme to assume when no theme is forced (default: detect from COLORFGBG)
    #[arg(long, value_enum, value_name = "SCHEME")]
    pub system_theme: Option<SchemeArg>,

    /// Show the +5 scoring button
    #[arg(long)]
    pub five_button: bool,

    /// Never ring the terminal bell
    #[arg(long)]
    pub no_bell: bool,

    /// Log file (default: buncotty.log in the data directory, none when ephemeral)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub ephemeral: bool,
    pub system_scheme: Scheme,
    pub show_five_button: bool,
    pub no_bell: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let data_dir = resolve_data_dir(cli.data_dir, env::var_os(DATA_DIR_ENV).map(PathBuf::from));
        let log_file = match cli.log_file {
            Some(path) => Some(path),
            None if cli.ephemeral => None,
            None => Some(data_dir.join(LOG_FILE_NAME)),
        };
        Config {
            system_scheme: cli
                .system_theme
                .map(Scheme::from)
                .unwrap_or_else(detect_system_scheme),
            ephemeral: cli.ephemeral,
            show_five_button: cli.five_button,
            no_bell: cli.no_bell,
            data_dir,
            log_file,
        }
    }
}

/// Resolve the data directory.
///
/// Priority:
/// 1. Explicit `--data-dir`
/// 2. `$BUNCOTTY_PATH`
/// 3. The platform config directory + `buncotty`
/// 4. The current directory
pub fn resolve_data_dir(explicit: Option<PathBuf>, from_env: Option<PathBuf>) -> PathBuf {
    explicit
        .or(from_env)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("buncotty")))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_priority() {
        let explicit = PathBuf::from("/tmp/explicit");
        let from_env = PathBuf::from("/tmp/env");
        assert_eq!(
            resolve_data_dir(Some(explicit.clone()), Some(from_env.clone())),
            explicit
        );
        assert_eq!(resolve_data_dir(None, Some(from_env.clone())), from_env);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "buncotty",
            "--data-dir",
            "/tmp/bunco",
            "--system-theme",
            "dark",
            "--five-button",
        ]);
        let config = Config::from_cli(cli);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/bunco"));
        assert_eq!(
            config.log_file,
            Some(PathBuf::from("/tmp/bunco").join(LOG_FILE_NAME))
        );
        assert_eq!(config.system_scheme, Scheme::Dark);
        assert!(config.show_five_button);
        assert!(!config.no_bell);
        assert!(!config.ephemeral);
    }

    #[test]
    fn test_ephemeral_writes_no_log_by_default() {
        let config = Config::from_cli(Cli::parse_from(["buncotty", "--ephemeral"]));
        assert!(config.ephemeral);
        assert_eq!(config.log_file, None);

        let config = Config::from_cli(Cli::parse_from([
            "buncotty",
            "--ephemeral",
            "--log-file",
            "/tmp/bunco.log",
        ]));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/bunco.log")));
    }
}
