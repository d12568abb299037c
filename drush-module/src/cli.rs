//! CLI argument parsing for drush-module
//!
//! Arguments normally arrive in a file written by the orchestrator; the flags
//! exist for running a task by hand and override whatever the file says.

use crate::args::ModuleArgs;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "drush-module")]
#[command(version, about = "Run a drush sub-command as a configuration task")]
pub struct Cli {
    /// File holding the task arguments (JSON or key=value)
    pub args_file: Option<PathBuf>,

    /// Root of the Drupal site
    #[arg(long)]
    pub path: Option<String>,

    /// drush sub-command to run (e.g. core-status, variable-set)
    #[arg(long)]
    pub command: Option<String>,

    /// Variable name for variable-get / variable-set
    #[arg(long)]
    pub name: Option<String>,

    /// Variable value for variable-set, or a trailing argument for other commands
    #[arg(long)]
    pub value: Option<String>,

    /// Report what would change without changing anything
    #[arg(long)]
    pub check: bool,

    /// drush executable to use instead of looking it up on PATH
    #[arg(long)]
    pub drush_bin: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Arguments given as flags.
    pub fn flag_args(&self) -> ModuleArgs {
        ModuleArgs {
            path: self.path.clone(),
            command: self.command.clone(),
            name: self.name.clone(),
            value: self.value.clone(),
            check_mode: self.check,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_module_args() {
        let cli = Cli::parse_from([
            "drush-module",
            "--path",
            "/var/www",
            "--command",
            "variable-get",
            "--name",
            "cron_safe_threshold",
            "--check",
        ]);
        assert!(cli.args_file.is_none());
        let args = cli.flag_args();
        assert_eq!(args.command.as_deref(), Some("variable-get"));
        assert_eq!(args.name.as_deref(), Some("cron_safe_threshold"));
        assert!(args.check_mode);
    }

    #[test]
    fn args_file_is_positional() {
        let cli = Cli::parse_from(["drush-module", "/tmp/args"]);
        assert_eq!(cli.args_file, Some(PathBuf::from("/tmp/args")));
        assert!(!cli.check);
    }
}
