use env_logger::Target;
use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// Logs always go to stderr so they never mix with an image on stdout.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .target(Target::Stderr)
        .init();
}
