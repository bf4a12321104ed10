//! Logger setup.
//!
//! Everything goes through the `log` facade to stderr. Stdout is reserved
//! for the dry-run summary so it can be piped.

use std::io::Write;

use log::LevelFilter;

/// Install the global logger. `RUST_LOG`, when set, overrides the level
/// picked from the flags.
pub(crate) fn init(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if verbose {
        builder.format_timestamp_millis();
    } else {
        // Plain messages, with a prefix only for problems.
        builder.format(|buf, record| match record.level() {
            log::Level::Error | log::Level::Warn => {
                writeln!(buf, "{}: {}", record.level(), record.args())
            }
            _ => writeln!(buf, "{}", record.args()),
        });
    }
    builder.parse_default_env();
    builder.init();
}
