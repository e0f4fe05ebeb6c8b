use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    Layer as _, filter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

/// Installs the global subscriber: stdout always, plus a daily-rolling file
/// under `log_dir` when given. Keep the returned guard alive for as long as
/// file logging should flush.
pub fn init_log(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let crate_filter = filter::Targets::new().with_targets([
        ("golf_rounds", Level::DEBUG),
        ("actix_web", Level::INFO),
        ("actix_server", Level::INFO),
    ]);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(crate_filter.clone());

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "golf-rounds.log");
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_filter(crate_filter);
            (Some(file_layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}
