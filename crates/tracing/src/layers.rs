use std::{
    fmt,
    path::{Path, PathBuf},
};

use rolling_file::{RollingConditionBasic, RollingFileAppender};
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::{filter::Directive, EnvFilter, Layer, Registry};

use crate::formatter::LogFormat;

/// A worker guard returned by the file layer.
///
/// When the guard is dropped, all events currently in-memory are flushed to
/// the log file this guard belongs to.
pub type FileWorkerGuard = tracing_appender::non_blocking::WorkerGuard;

/// A boxed tracing [`Layer`].
pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Holds the output layers enabled during tracer configuration.
#[derive(Default)]
pub struct Layers {
    inner: Vec<BoxedLayer<Registry>>,
}

impl Layers {
    /// Creates an empty set of layers.
    pub fn new() -> Self {
        Self { inner: vec![] }
    }

    /// Consumes the set and returns the collected layers.
    pub(crate) fn into_inner(self) -> Vec<BoxedLayer<Registry>> {
        self.inner
    }

    /// Adds a stdout layer with the given format, default directive, extra
    /// filter directives, and color configuration.
    pub fn stdout(
        &mut self,
        format: LogFormat,
        default_directive: Directive,
        filters: &str,
        color: Option<String>,
    ) -> eyre::Result<()> {
        let filter = build_env_filter(Some(default_directive), filters)?;
        self.inner.push(format.apply(filter, color, None));
        Ok(())
    }

    /// Adds a journald layer filtered by the given directives.
    pub fn journald(&mut self, filters: &str) -> eyre::Result<()> {
        let filter = build_env_filter(None, filters)?;
        let layer = tracing_journald::layer()?.with_filter(filter).boxed();
        self.inner.push(layer);
        Ok(())
    }

    /// Adds a rolling-file layer, returning the worker guard that flushes the
    /// file on drop.
    pub fn file(
        &mut self,
        format: LogFormat,
        filters: &str,
        file_info: FileInfo,
    ) -> eyre::Result<FileWorkerGuard> {
        let (writer, guard) = file_info.create_log_writer()?;
        let filter = build_env_filter(None, filters)?;
        self.inner.push(format.apply(filter, None, Some(writer)));
        Ok(guard)
    }
}

impl fmt::Debug for Layers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layers").field("count", &self.inner.len()).finish()
    }
}

/// Configuration for a rolling log file.
#[derive(Debug, Clone)]
pub struct FileInfo {
    dir: PathBuf,
    file_name: String,
    max_size_bytes: u64,
    max_files: usize,
}

impl FileInfo {
    /// Creates a new rolling-file configuration.
    pub fn new(dir: PathBuf, file_name: String, max_size_bytes: u64, max_files: usize) -> Self {
        Self { dir, file_name, max_size_bytes, max_files }
    }

    /// Creates the log directory if it doesn't exist and returns its path.
    fn create_log_dir(&self) -> eyre::Result<&Path> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir)?;
        }
        Ok(&self.dir)
    }

    /// Creates a non-blocking writer over the rolling log file.
    fn create_log_writer(&self) -> eyre::Result<(NonBlocking, FileWorkerGuard)> {
        let log_dir = self.create_log_dir()?;
        let appender = RollingFileAppender::new(
            log_dir.join(&self.file_name),
            RollingConditionBasic::new().max_size(self.max_size_bytes),
            self.max_files,
        )?;
        Ok(tracing_appender::non_blocking(appender))
    }
}

/// Builds an env filter from an optional default directive and a
/// comma-separated list of extra directives. `RUST_LOG` is honored when set.
fn build_env_filter(
    default_directive: Option<Directive>,
    directives: &str,
) -> eyre::Result<EnvFilter> {
    let mut filter = match default_directive {
        Some(directive) => {
            EnvFilter::builder().with_default_directive(directive).from_env_lossy()
        }
        None => EnvFilter::builder().from_env_lossy(),
    };

    for directive in directives.split(',').filter(|d| !d.is_empty()) {
        filter = filter.add_directive(directive.parse()?);
    }

    Ok(filter)
}
