use env_logger::Target;
use std::fs;
use std::path::PathBuf;

/// Initialise logging. Stdout carries the task response, so logs go to
/// `log_file` when it can be opened and to stderr otherwise.
pub fn init_with(log_file: Option<PathBuf>) {
    let target = log_file
        .and_then(|path| {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).ok()?;
            }
            fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        })
        .map(|file| Target::Pipe(Box::new(file)))
        .unwrap_or(Target::Stderr);

    // Respect RUST_LOG if set, otherwise default to info.
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .target(target)
        .try_init();
}
