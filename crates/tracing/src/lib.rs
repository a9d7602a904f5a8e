//! The `arc19-tracing` crate provides utilities for configuring and
//! initializing tracing in arc19 binaries, with support for stdout, rolling
//! log file, and journald output layers.

mod formatter;
mod layers;

use eyre::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use formatter::LogFormat;
pub use layers::{FileInfo, FileWorkerGuard, Layers};

// Re-exported so downstream binaries can construct filter directives without
// depending on tracing-subscriber directly.
pub use tracing_subscriber;

/// Tracer for application logging.
///
/// Managing the destinations and formats of log output happens through the
/// implementor; callers only `init` once at startup.
pub trait Tracer {
    /// Initialize the logging configuration. Returns the file worker guard
    /// when a file layer was configured; the guard must be held for the
    /// lifetime of the program.
    fn init(self) -> Result<Option<FileWorkerGuard>>;
}

/// Configuration for a tracing output layer: its format, filter directives,
/// and color behavior.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Creates a new [`LayerInfo`].
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

impl Default for LayerInfo {
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: LevelFilter::INFO.to_string(),
            filters: String::new(),
            color: Some("always".to_string()),
        }
    }
}

/// The tracer used by the arc19 binaries: a stdout layer, plus optional
/// journald and rolling-file layers.
#[derive(Debug, Clone, Default)]
pub struct Arc19Tracer {
    stdout: LayerInfo,
    journald: Option<String>,
    file: Option<(LayerInfo, FileInfo)>,
}

impl Arc19Tracer {
    /// Creates a new tracer with default (terminal) stdout output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stdout layer configuration.
    pub fn with_stdout(mut self, stdout: LayerInfo) -> Self {
        self.stdout = stdout;
        self
    }

    /// Enables the journald layer with the given filter directives.
    pub fn with_journald(mut self, filter: String) -> Self {
        self.journald = Some(filter);
        self
    }

    /// Enables a rolling-file layer.
    pub fn with_file(mut self, layer: LayerInfo, file_info: FileInfo) -> Self {
        self.file = Some((layer, file_info));
        self
    }
}

impl Tracer for Arc19Tracer {
    fn init(self) -> Result<Option<FileWorkerGuard>> {
        let mut layers = Layers::new();

        layers.stdout(
            self.stdout.format,
            self.stdout.default_directive.parse()?,
            &self.stdout.filters,
            self.stdout.color.clone(),
        )?;

        if let Some(filter) = self.journald {
            layers.journald(&filter)?;
        }

        let file_guard = match self.file {
            Some((layer, file_info)) => Some(layers.file(layer.format, &layer.filters, file_info)?),
            None => None,
        };

        tracing_subscriber::registry().with(layers.into_inner()).try_init()?;
        Ok(file_guard)
    }
}
