//! Logging infrastructure
//!
//! Structured logging setup for both development and production runs.

use std::path::Path;

/// Initialize the logger from the loaded configuration
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Daily-rolling file output when a log directory is configured
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "comedor-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
        eprintln!("log dir {dir} does not exist, logging to stdout");
    }

    subscriber.init();
}
