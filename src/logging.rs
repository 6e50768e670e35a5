//! File logging for the TUI.
//!
//! The terminal belongs to the UI, so tracing output only goes to a file,
//! and only when `STORYREEL_LOG` names one.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::time::Uptime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the log file prefix.
pub const LOG_ENV: &str = "STORYREEL_LOG";

/// Filter used when `RUST_LOG` is unset: our own events at info, the
/// image decoders and the runtime only when they warn.
const DEFAULT_FILTER: &str = "warn,storyreel=info";

/// Install the file subscriber if `STORYREEL_LOG` is set.
///
/// Returns the file actually written, so the caller can report it once the
/// subscriber is live. Two sessions never share a file.
pub fn init_tracing() -> Option<PathBuf> {
    let prefix = std::env::var_os(LOG_ENV)?;
    let path = session_log_path(Path::new(&prefix), SystemTime::now(), std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {err}", path.display());
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_timer(Uptime::default())
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;
    Some(path)
}

/// `<prefix>.<unix seconds>.<pid>`
fn session_log_path(prefix: &Path, started: SystemTime, pid: u32) -> PathBuf {
    let secs = started
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!(".{secs}.{pid}"));
    PathBuf::from(name)
}
