use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TracingConfig
{
	/// Whether to record HTTP request/response headers in request spans.
	pub include_http_headers: bool,
	pub stderr: StderrConfig,
	pub files: FilesConfig,
}

/// Human-readable output on stderr.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct StderrConfig
{
	pub enable: bool,
	pub ansi: bool,
}

/// JSON logs written to daily-rotated files.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilesConfig
{
	pub enable: bool,
	pub directory: Box<Path>,
}

impl Default for StderrConfig
{
	fn default() -> Self
	{
		Self { enable: true, ansi: true }
	}
}

impl Default for FilesConfig
{
	fn default() -> Self
	{
		Self { enable: false, directory: default_files_directory() }
	}
}

fn default_files_directory() -> Box<Path>
{
	PathBuf::from("/var/log/alertlabel-api").into_boxed_path()
}
