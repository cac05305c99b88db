//! 服务端日志
//!
//! Every event goes to a daily rolling file under the app log dir and is mirrored to stderr
//! so `zview` can run in the foreground. Each request runs inside a `request` span (see
//! `app::handler::respond`); the span's close event records how long the request took.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "zview.log";
/// Our own events at info, the HTTP stack only when it complains.
const DEFAULT_FILTER: &str = "zview=info,axum=warn,hyper=warn";

/// Keeps the background file writer alive; drop it last so buffered lines are flushed.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

#[derive(Clone)]
struct ServerLogWriter {
    file: NonBlocking,
}

struct MirroredWriter {
    file: NonBlocking,
    stderr: io::Stderr,
}

impl<'a> MakeWriter<'a> for ServerLogWriter {
    type Writer = MirroredWriter;

    fn make_writer(&'a self) -> Self::Writer {
        MirroredWriter {
            file: self.file.make_writer(),
            stderr: io::stderr(),
        }
    }
}

impl Write for MirroredWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        // stderr 写失败（例如被关闭）不影响文件日志
        let _ = self.stderr.write_all(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        self.stderr.flush()
    }
}

fn log_dir_or_temp() -> Option<PathBuf> {
    zview::kernel::services::adapters::ensure_log_dir()
        .or_else(|_| -> io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("zview").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()
}

/// Install the global subscriber. `RUST_LOG` overrides [`DEFAULT_FILTER`].
pub fn init() -> Option<LoggingGuard> {
    let log_dir = log_dir_or_temp()?;

    let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (file, file_guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(ServerLogWriter { file })
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), version = env!("CARGO_PKG_VERSION"), "logging to file and stderr");

    Some(LoggingGuard {
        _file_guard: file_guard,
        log_dir,
    })
}
