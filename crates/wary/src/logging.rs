use tracing_subscriber::filter::LevelFilter;

/// Verbosity of the diagnostics printed on stderr while checking.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Send logs to stderr so they never mix with the reported violations.
pub fn init_logging(level: LogLevel, no_color: bool) {
    tracing_subscriber::fmt()
        .with_max_level(level.level_filter())
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}
