//! Logger setup for the command-line binary

use log::LevelFilter;
use std::env;

/// Initialize the `env_logger` backend
///
/// Logs at `Info` by default and at `Debug` when `debug_enabled` is set.
/// An explicit `RUST_LOG` takes precedence over both. Calling this more
/// than once leaves the first logger in place.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
