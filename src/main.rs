//! localnews binary entrypoint kept minimal. The full runtime lives in `localnews::app`.

mod args;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

/// Log timestamp in local time, `YYYY-MM-DDTHH:MM:SS.mmm`.
struct LocalnewsTimer;

impl tracing_subscriber::fmt::time::FormatTime for LocalnewsTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

/// Keeps the non-blocking log writer alive for the whole process.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter used when `RUST_LOG` is unset or invalid.
///
/// Details:
/// - Writes to `<config>/logs/localnews.log` through a non-blocking appender; the guard
///   lives in `LOG_GUARD` so buffered lines are flushed at exit.
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = localnews::theme::logs_dir();
    log_path.push("localnews.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(LocalnewsTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(LocalnewsTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    let (mut settings, _warnings) = localnews::theme::load_settings();
    args::apply_overrides(&args, &mut settings);
    let initial_city = args::initial_city(&args);

    args::process_args(&args, &settings, initial_city.as_ref());

    tracing::info!(api = %settings.api_base_url, "localnews starting");
    if let Err(err) = localnews::app::run(settings, initial_city).await {
        tracing::error!(error = %err, "Application error");
        eprintln!("localnews: {err}");
        std::process::exit(1);
    }
    tracing::info!("localnews exited");
}
