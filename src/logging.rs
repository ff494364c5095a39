use chrono::Utc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where log records go.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogKind {
    /// Standard error, so decoder output on stdout stays clean.
    #[default]
    Stderr,

    /// A file in the temp directory, `dectree-<timestamp>.log`.
    File,
}

/// Installs the global subscriber. `RUST_LOG` overrides the default `warn`
/// level. The returned guard flushes the file sink when dropped.
pub fn init(kind: LogKind) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match kind {
        LogKind::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            None
        }
        LogKind::File => {
            let filename = log_file_name(Utc::now().timestamp());
            let dir = std::env::temp_dir();
            println!("Logging to file: {}", dir.join(&filename).display());

            let appender = tracing_appender::rolling::never(dir, filename);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
    }
}

fn log_file_name(timestamp: i64) -> String {
    format!("dectree-{timestamp}.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_name_carries_timestamp() {
        assert_eq!(log_file_name(1_700_000_000), "dectree-1700000000.log");
    }
}
