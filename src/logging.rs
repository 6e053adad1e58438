use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file when `--log-file` is absent.
pub const LOG_ENV_VAR: &str = "PHILOSPHERE_LOG";

/// Initialize tracing with file output.
///
/// Logging is disabled unless `log_path` or `PHILOSPHERE_LOG` names a file,
/// since stdout belongs to the TUI. Returns the file actually written.
///
/// Log files get unique names so that parallel instances do not clash:
/// `{path}.{timestamp}.{pid}`
pub fn init_tracing(log_path: Option<&Path>) -> Option<PathBuf> {
    let base = match log_path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(std::env::var_os(LOG_ENV_VAR)?),
    };
    let unique_path = unique_log_path(&base, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path.display());
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(unique_path)
}

fn unique_log_path(base: &Path, pid: u32) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}
