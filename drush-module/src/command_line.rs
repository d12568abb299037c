//! drush argument vectors.

use crate::request::CommandIntent;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

const FORMAT_JSON: &str = "--format=json";
const NO_COLOR: &str = "--nocolor";
const ASSUME_YES: &str = "-y";
const EXACT: &str = "--exact";

/// A fully built drush invocation. Arguments are passed to the child verbatim;
/// no shell is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandLine {
    pub fn for_intent(program: &Path, intent: &CommandIntent<'_>) -> Self {
        let command = intent.sub_command();
        let mut args = vec![command.as_str().to_string()];
        if !command.rejects_format_flag() {
            args.push(FORMAT_JSON.to_string());
        }
        args.push(NO_COLOR.to_string());
        args.push(ASSUME_YES.to_string());

        match intent {
            CommandIntent::Get { name } => {
                args.push(name.to_string());
                args.push(EXACT.to_string());
            }
            CommandIntent::Set { name, value } => {
                args.push(name.to_string());
                args.push(EXACT.to_string());
                // JSON-encoded so empty strings and quotes survive drush's own parsing.
                args.push(Value::String(value.to_string()).to_string());
            }
            CommandIntent::Other { name, value, .. } => {
                args.extend(name.map(str::to_string));
                args.extend(value.map(str::to_string));
            }
        }

        Self {
            program: program.to_path_buf(),
            args,
        }
    }

    /// Plain-text read of a variable, used to record its value before a set.
    pub fn baseline(program: &Path, name: &str) -> Self {
        Self {
            program: program.to_path_buf(),
            args: vec![
                "vget".to_string(),
                "--format=string".to_string(),
                EXACT.to_string(),
                name.to_string(),
            ],
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Shell-style rendering, for diagnostics only.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program.to_string_lossy()))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

fn shell_quote(token: &str) -> String {
    let plain = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-.,:/=@%+".contains(c));
    if plain {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r#"'"'"'"#))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SubCommand;

    fn drush() -> &'static Path {
        Path::new("/usr/local/bin/drush")
    }

    #[test]
    fn status_gets_json_and_non_interactive_flags() {
        let intent = CommandIntent::Other {
            command: SubCommand::parse("core-status"),
            name: None,
            value: None,
        };
        let line = CommandLine::for_intent(drush(), &intent);
        assert_eq!(line.args(), ["core-status", "--format=json", "--nocolor", "-y"]);
        assert_eq!(
            line.to_string(),
            "/usr/local/bin/drush core-status --format=json --nocolor -y"
        );
    }

    #[test]
    fn cache_clear_omits_format_flag() {
        let intent = CommandIntent::Other {
            command: SubCommand::parse("cc"),
            name: None,
            value: Some("all"),
        };
        let line = CommandLine::for_intent(drush(), &intent);
        assert_eq!(line.args(), ["cc", "--nocolor", "-y", "all"]);
    }

    #[test]
    fn variable_get_is_exact() {
        let intent = CommandIntent::Get {
            name: "cron_safe_threshold",
        };
        let line = CommandLine::for_intent(drush(), &intent);
        assert_eq!(
            line.args(),
            [
                "variable-get",
                "--format=json",
                "--nocolor",
                "-y",
                "cron_safe_threshold",
                "--exact"
            ]
        );
    }

    #[test]
    fn variable_set_json_encodes_value() {
        let intent = CommandIntent::Set {
            name: "site_slogan",
            value: "it's \"fine\"",
        };
        let line = CommandLine::for_intent(drush(), &intent);
        assert_eq!(line.args().last(), Some(&r#""it's \"fine\"""#));
        assert!(line
            .to_string()
            .ends_with(r#"site_slogan --exact '"it'"'"'s \"fine\""'"#));
    }

    #[test]
    fn other_commands_take_name_then_bare_value() {
        let intent = CommandIntent::Other {
            command: SubCommand::parse("pm-enable"),
            name: Some("views"),
            value: Some("--resolve-dependencies"),
        };
        let line = CommandLine::for_intent(drush(), &intent);
        assert_eq!(
            line.args(),
            [
                "pm-enable",
                "--format=json",
                "--nocolor",
                "-y",
                "views",
                "--resolve-dependencies"
            ]
        );
    }

    #[test]
    fn baseline_reads_plain_string() {
        let line = CommandLine::baseline(drush(), "page_cache_maximum_age");
        assert_eq!(
            line.args(),
            ["vget", "--format=string", "--exact", "page_cache_maximum_age"]
        );
    }

    #[test]
    fn empty_tokens_are_quoted() {
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("a b"), "'a b'");
        assert_eq!(shell_quote("--format=json"), "--format=json");
    }
}
