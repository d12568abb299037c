use crate::cli::Cli;
use std::env;
use std::path::PathBuf;

/// Environment override for the drush executable.
pub const DRUSH_BIN_ENV: &str = "DRUSH_MODULE_BIN";
const DEFAULT_DRUSH: &str = "drush";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name or path of the drush executable, resolved against PATH at run time.
    pub drush_bin: String,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn new(drush_bin: impl Into<String>, log_file: Option<PathBuf>) -> Self {
        Self {
            drush_bin: drush_bin.into(),
            log_file,
        }
    }

    /// `--drush-bin` wins over the environment, which wins over plain `drush`.
    pub fn from_cli(cli: &Cli) -> Self {
        let drush_bin = cli
            .drush_bin
            .clone()
            .or_else(|| env::var(DRUSH_BIN_ENV).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_DRUSH.to_string());
        Self::new(drush_bin, cli.log_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_env;
    use clap::Parser;

    #[test]
    fn flag_beats_environment() {
        let _lock = test_env::lock();
        env::set_var(DRUSH_BIN_ENV, "/opt/drush/drush");

        let cli = Cli::parse_from(["drush-module", "--drush-bin", "/usr/bin/drush8"]);
        assert_eq!(Config::from_cli(&cli).drush_bin, "/usr/bin/drush8");

        let cli = Cli::parse_from(["drush-module"]);
        assert_eq!(Config::from_cli(&cli).drush_bin, "/opt/drush/drush");

        env::remove_var(DRUSH_BIN_ENV);
        assert_eq!(Config::from_cli(&cli).drush_bin, "drush");
    }
}
