//! Logger setup for the plotting binaries.

use log::LevelFilter;
use std::io::Write;

/// Initialise `env_logger`.
///
/// Verbose runs log at debug level as `<timestamp> - <message>`. Otherwise
/// only warnings are shown unless `RUST_LOG` asks for more.
pub fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if verbose {
        builder
            .filter_level(LevelFilter::Debug)
            .format(|buf, record| writeln!(buf, "{} - {}", buf.timestamp(), record.args()));
    }

    // A second initialisation (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
