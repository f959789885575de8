//! Diagnostic logging.
//!
//! Logs go to stderr so they never interleave with the calculator's prompts
//! on stdout. The default level is `warn`, which keeps a normal session
//! silent.
//!
//! `RUST_LOG` takes precedence over configuration:
//! ```bash
//! RUST_LOG=calc_console=debug calc-console
//! ```

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Map `-v` occurrences to a level floor. Zero keeps the configured level.
pub fn level_for_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Build the filter directive string from config and `-v` count.
pub fn filter_directives(config: &LoggingConfig, verbose: u8) -> String {
    match level_for_verbosity(verbose) {
        Some(level) => {
            let mut raised = config.clone();
            raised.default = level.to_string();
            raised.directives()
        }
        None => config.directives(),
    }
}

/// Initialize logging. Only the first call takes effect.
pub fn init_with_config(config: &LoggingConfig, verbose: u8) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(filter_directives(config, verbose))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
