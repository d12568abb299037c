//! Process abstraction layer for the drush adapter.
//!
//! Running drush is the only world-touching thing the adapter does, so it goes
//! through [`ProcessOps`]. [`LinuxHal`] spawns real children; [`FakeHal`] replays
//! scripted results and records every invocation for tests.

pub mod hal;
pub mod path;

pub use drush_error::{HalError, HalResult};
pub use hal::{FakeHal, FakeResponse, LinuxHal, Operation, ProcessOps};
