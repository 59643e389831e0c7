//! Logger setup for native hosts of the history. The wasm binding installs
//! its own console logger instead.

use log::LevelFilter;

const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for history events (renders, back navigation, evictions).
    /// Everything else logs at `Warn` unless overridden by `directives`.
    pub history_level: LevelFilter,
    /// Extra `env_logger` directives applied on top, e.g.
    /// "fractal_history_core::history=trace". Falls back to `RUST_LOG`.
    pub directives: Option<String>,
    /// Send output through the test harness capture.
    pub for_tests: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { history_level: LevelFilter::Info, directives: None, for_tests: false }
    }
}

/// Installs `env_logger` as the global logger. Returns `false` when a logger
/// was already installed, in which case the config is ignored.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module(CRATE_TARGET, config.history_level)
        .is_test(config.for_tests);

    if let Some(directives) = config.directives.or_else(|| std::env::var("RUST_LOG").ok()) {
        builder.parse_filters(&directives);
    }

    let installed = builder.try_init().is_ok();
    if installed {
        log::debug!("history logging at {}", config.history_level);
    }
    installed
}
