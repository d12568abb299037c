//! drush task adapter.
//!
//! Turns a declarative request (site path, sub-command, optional variable
//! name/value) into a drush invocation, runs it unless check mode forbids it,
//! and reports whether the site changed.

pub mod adapter;
pub mod args;
pub mod cli;
pub mod command_line;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;
pub mod outcome;
pub mod request;
pub mod response;

#[cfg(test)]
mod test_env;

use anyhow::Context;
use args::ModuleArgs;
use cli::Cli;
use config::Config;
use drush_hal::LinuxHal;
use outcome::Outcome;
use response::Response;
use std::fs;

pub use adapter::Adapter;
pub use errors::DrushError;
pub use request::Request;

/// Run one task and shape the result for the caller. Never fails: errors become
/// a failure response.
pub fn run(cli: &Cli) -> Response {
    let config = Config::from_cli(cli);
    match run_task(cli, &config) {
        Ok(outcome) => Response::success(&outcome),
        Err(err) => {
            log::error!("{err:#}");
            Response::failure(&err)
        }
    }
}

fn run_task(cli: &Cli, config: &Config) -> anyhow::Result<Outcome> {
    let file_args = match &cli.args_file {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read arguments file {}", path.display()))?;
            ModuleArgs::parse(&contents)?
        }
        None => ModuleArgs::default(),
    };
    let (request, check_mode) = file_args.merge(cli.flag_args()).into_request()?;

    // Validate before touching PATH so precondition failures are reported as such.
    request.intent()?;
    let program = drush_hal::path::resolve_program(&config.drush_bin)?;
    log::debug!("using drush at {}", program.display());

    let adapter = Adapter::new(LinuxHal::new(), program);
    Ok(adapter.execute(&request, check_mode)?)
}
