//! Executable lookup on `PATH`.

use crate::{HalError, HalResult};
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Locate `program` the way a shell would.
///
/// A name containing a path separator is taken as-is and only checked for
/// existence; a bare name is searched for in every `PATH` entry.
pub fn resolve_program(program: &str) -> HalResult<PathBuf> {
    let path_var = env::var_os("PATH").unwrap_or_default();
    resolve_program_in(program, &path_var)
}

pub fn resolve_program_in(program: &str, path_var: &OsStr) -> HalResult<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        if is_executable(candidate) {
            return Ok(candidate.to_path_buf());
        }
    } else {
        let entries = env::split_paths(path_var).collect::<Vec<_>>();
        if let Some(found) = find_in_paths(program, &entries) {
            return Ok(found);
        }
    }
    Err(HalError::CommandNotFound {
        program: program.to_string(),
        searched: path_var.to_string_lossy().into_owned(),
    })
}

fn find_in_paths(binary: &str, paths: &[PathBuf]) -> Option<PathBuf> {
    paths
        .iter()
        .map(|dir| dir.join(binary))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    let Ok(md) = fs::metadata(path) else {
        return false;
    };
    if !md.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        md.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}
