//! API configuration.
//!
//! Values come from (in increasing order of precedence) built-in defaults, an optional TOML
//! file, and CLI flags / environment variables (see [`crate::cli`]).

use std::path::Path;
use std::{fs, io};

use serde::Deserialize;

mod database;
mod http;
mod runtime;
mod tracing;

pub use self::database::DatabaseConfig;
pub use self::http::HttpConfig;
pub use self::runtime::RuntimeConfig;
pub use self::tracing::{FilesConfig, StderrConfig, TracingConfig};

/// The file we look for if no path was given explicitly.
pub const DEFAULT_PATH: &str = "./alertlabel-api.toml";

/// The global configuration for the API.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config
{
	pub runtime: RuntimeConfig,
	pub http: HttpConfig,
	pub database: DatabaseConfig,
	pub tracing: TracingConfig,
}

/// Errors that can occur when loading the [`Config`] from a file.
#[derive(Debug, Display, Error)]
pub enum LoadFromFileError
{
	#[display("failed to read configuration file: {_0}")]
	ReadFile(io::Error),

	#[display("failed to parse configuration file: {_0}")]
	Deserialize(toml::de::Error),
}

impl Config
{
	/// Loads a file into memory and parses it into a [`Config`] object.
	pub fn load_from_file(path: &Path) -> Result<Self, LoadFromFileError>
	{
		fs::read_to_string(path)
			.map(|file_contents| toml::from_str(&file_contents))
			.map_err(LoadFromFileError::ReadFile)?
			.map_err(LoadFromFileError::Deserialize)
	}

	/// Loads the config from `path`, or from [`DEFAULT_PATH`] if it exists, or falls back to
	/// the defaults.
	pub fn load(path: Option<&Path>) -> Result<Self, LoadFromFileError>
	{
		if let Some(path) = path {
			return Self::load_from_file(path);
		}

		let default_path = Path::new(DEFAULT_PATH);

		match fs::exists(default_path) {
			Ok(true) => Self::load_from_file(default_path),
			Ok(false) => Ok(Self::default()),
			Err(error) => Err(LoadFromFileError::ReadFile(error)),
		}
	}
}
