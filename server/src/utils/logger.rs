//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and
//! production environments.

use tracing_subscriber::EnvFilter;

/// Initialize the logger from the environment (`LOG_LEVEL`, `LOG_DIR`)
pub fn init_logger() {
    let level = std::env::var("LOG_LEVEL").ok();
    let dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(level.as_deref(), dir.as_deref());
}

/// Initialize the logger with optional daily-rolling file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let path = std::path::Path::new(dir);
        if path.exists()
            && let Some(dir_str) = path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "idms-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
