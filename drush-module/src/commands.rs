//! drush sub-command classification.
//!
//! The adapter only needs to know three things about a sub-command: whether it
//! is read-only (safe to run in check mode), whether it rejects
//! `--format=json`, and whether it is one of the named-value operations. All of
//! that lives in the static tables below.

use std::fmt;

/// Sub-commands the adapter treats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownCommand {
    ConfigGet,
    CoreRequirements,
    CoreStatus,
    DrupalDirectory,
    PmInfo,
    PmList,
    PmProjectinfo,
    SearchStatus,
    StateGet,
    Status,
    UserInformation,
    VariableGet,
    VariableSet,
    WatchdogList,
    WatchdogShow,
    Updb,
    Updatedb,
    Cc,
    CacheClear,
}

/// Sub-commands that never mutate site state.
pub const READ_ONLY: &[KnownCommand] = &[
    KnownCommand::ConfigGet,
    KnownCommand::CoreRequirements,
    KnownCommand::CoreStatus,
    KnownCommand::DrupalDirectory,
    KnownCommand::PmInfo,
    KnownCommand::PmList,
    KnownCommand::PmProjectinfo,
    KnownCommand::SearchStatus,
    KnownCommand::StateGet,
    KnownCommand::Status,
    KnownCommand::UserInformation,
    KnownCommand::VariableGet,
    KnownCommand::WatchdogList,
    KnownCommand::WatchdogShow,
];

/// Sub-commands that fail when passed `--format=json`.
pub const REJECTS_FORMAT_FLAG: &[KnownCommand] = &[
    KnownCommand::Updb,
    KnownCommand::Updatedb,
    KnownCommand::Cc,
    KnownCommand::CacheClear,
];

impl KnownCommand {
    pub const ALL: [KnownCommand; 19] = [
        KnownCommand::ConfigGet,
        KnownCommand::CoreRequirements,
        KnownCommand::CoreStatus,
        KnownCommand::DrupalDirectory,
        KnownCommand::PmInfo,
        KnownCommand::PmList,
        KnownCommand::PmProjectinfo,
        KnownCommand::SearchStatus,
        KnownCommand::StateGet,
        KnownCommand::Status,
        KnownCommand::UserInformation,
        KnownCommand::VariableGet,
        KnownCommand::VariableSet,
        KnownCommand::WatchdogList,
        KnownCommand::WatchdogShow,
        KnownCommand::Updb,
        KnownCommand::Updatedb,
        KnownCommand::Cc,
        KnownCommand::CacheClear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KnownCommand::ConfigGet => "config-get",
            KnownCommand::CoreRequirements => "core-requirements",
            KnownCommand::CoreStatus => "core-status",
            KnownCommand::DrupalDirectory => "drupal-directory",
            KnownCommand::PmInfo => "pm-info",
            KnownCommand::PmList => "pm-list",
            KnownCommand::PmProjectinfo => "pm-projectinfo",
            KnownCommand::SearchStatus => "search-status",
            KnownCommand::StateGet => "state-get",
            KnownCommand::Status => "status",
            KnownCommand::UserInformation => "user-information",
            KnownCommand::VariableGet => "variable-get",
            KnownCommand::VariableSet => "variable-set",
            KnownCommand::WatchdogList => "watchdog-list",
            KnownCommand::WatchdogShow => "watchdog-show",
            KnownCommand::Updb => "updb",
            KnownCommand::Updatedb => "updatedb",
            KnownCommand::Cc => "cc",
            KnownCommand::CacheClear => "cache-clear",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.as_str() == name)
    }

    pub fn is_read_only(self) -> bool {
        READ_ONLY.contains(&self)
    }

    pub fn rejects_format_flag(self) -> bool {
        REJECTS_FORMAT_FLAG.contains(&self)
    }
}

/// A sub-command as requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubCommand {
    Known(KnownCommand),
    Other(String),
}

impl SubCommand {
    pub fn parse(name: &str) -> Self {
        match KnownCommand::from_name(name) {
            Some(known) => SubCommand::Known(known),
            None => SubCommand::Other(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SubCommand::Known(known) => known.as_str(),
            SubCommand::Other(name) => name,
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, SubCommand::Known(known) if known.is_read_only())
    }

    pub fn rejects_format_flag(&self) -> bool {
        matches!(self, SubCommand::Known(known) if known.rejects_format_flag())
    }
}

impl fmt::Display for SubCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
