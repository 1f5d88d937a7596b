//! Logging setup.

use std::{fs, io};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::TracingConfig;

/// The filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "alertlabel_api=info,warn";

/// Keeps background writers alive.
///
/// Dropping this flushes any buffered log lines.
#[must_use]
#[derive(Debug)]
pub(crate) struct Guard
{
	_files_guard: Option<WorkerGuard>,
}

#[derive(Debug, Display, Error, From)]
pub enum InitError
{
	#[display("failed to create log directory: {_0}")]
	CreateLogDirectory(io::Error),

	#[display("failed to install logfile writer: {_0}")]
	InstallLogfileWriter(tracing_appender::rolling::InitError),

	#[display("failed to install global subscriber: {_0}")]
	Install(TryInitError),
}

/// Installs the global tracing subscriber.
pub(crate) fn init(config: &TracingConfig) -> Result<Guard, InitError>
{
	let stderr_layer = config.stderr.enable.then(|| {
		tracing_subscriber::fmt::layer()
			.pretty()
			.with_ansi(config.stderr.ansi)
			.with_writer(io::stderr)
			.with_timer(UtcTime::rfc_3339())
	});

	let (files_layer, files_guard) = config
		.files
		.enable
		.then(|| -> Result<_, InitError> {
			fs::create_dir_all(&*config.files.directory)?;

			let (writer, guard) = tracing_appender::rolling::Builder::default()
				.rotation(tracing_appender::rolling::Rotation::DAILY)
				.filename_prefix("alertlabel-api")
				.filename_suffix("log")
				.build(&*config.files.directory)
				.map(tracing_appender::non_blocking)?;

			let layer = tracing_subscriber::fmt::layer()
				.json()
				.with_file(false)
				.with_line_number(false)
				.with_span_list(true)
				.with_writer(writer)
				.with_timer(UtcTime::rfc_3339());

			Ok((layer, guard))
		})
		.transpose()?
		.unzip();

	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

	tracing_subscriber::registry()
		.with(Layer::and_then(stderr_layer, files_layer).with_filter(env_filter))
		.try_init()?;

	Ok(Guard { _files_guard: files_guard })
}
