//! Logging setup for the binary.
//!
//! Library code only emits `tracing` events; the binary decides where they go.
//! `RUST_LOG` wins when set, otherwise the `-v` count picks the level:
//!
//! | `-v` | level |
//! |------|-------|
//! | 0    | warn  |
//! | 1    | info  |
//! | 2    | debug |
//! | 3+   | trace |

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Filter from `RUST_LOG`, falling back to the verbosity level for this crate.
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level_for_verbosity(verbosity);
        EnvFilter::new(format!("warn,turnos_dashboard={level},turnos={level}"))
    })
}

/// Install the global subscriber writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
