//! CLI argument handling.

use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use url::Url;

use crate::config::Config;

/// HTTP server exposing CRUD operations over the `alertlabel` table.
///
/// The API requires a running PostgreSQL instance it can connect to. Connection details are
/// usually passed through the environment (`DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`,
/// `POSTGRES_PASSWORD`), optionally loaded from a `.env` file. Variables that are set to an empty
/// string count as unset.
#[derive(Debug, Parser)]
pub struct Args
{
	/// Path to the configuration file.
	///
	/// If omitted, `./alertlabel-api.toml` is used if it exists.
	#[arg(long = "config")]
	pub config_path: Option<PathBuf>,

	/// Path to a custom `.env` file.
	#[arg(long)]
	pub env_file: Option<PathBuf>,

	/// The IP address to listen on.
	#[arg(long)]
	pub ip: Option<IpAddr>,

	/// The port to listen on.
	#[arg(long)]
	pub port: Option<u16>,

	/// A full database URL; takes precedence over the individual `--db-*` options.
	#[arg(long, env = "DATABASE_URL", hide_env_values = true, value_parser = maybe_empty::<Url>)]
	pub db_url: Option<MaybeEmpty<Url>>,

	/// The database host.
	#[arg(long, env = "DB_HOST", value_parser = maybe_empty::<String>)]
	pub db_host: Option<MaybeEmpty<String>>,

	/// The database port.
	#[arg(long, env = "DB_PORT", value_parser = maybe_empty::<u16>)]
	pub db_port: Option<MaybeEmpty<u16>>,

	/// The name of the database.
	#[arg(long, env = "DB_NAME", value_parser = maybe_empty::<String>)]
	pub db_name: Option<MaybeEmpty<String>>,

	/// The database user.
	#[arg(long, env = "DB_USER", value_parser = maybe_empty::<String>)]
	pub db_user: Option<MaybeEmpty<String>>,

	/// The database user's password.
	#[arg(
		long,
		env = "POSTGRES_PASSWORD",
		hide_env_values = true,
		value_parser = maybe_empty::<String>,
	)]
	pub db_password: Option<MaybeEmpty<String>>,
}

/// A CLI or environment value that may be an empty string, which means "not set".
#[derive(Debug, Clone)]
pub struct MaybeEmpty<T>(Option<T>);

impl<T> MaybeEmpty<T>
{
	pub fn into_inner(self) -> Option<T>
	{
		self.0
	}
}

fn maybe_empty<T: FromStr>(value: &str) -> Result<MaybeEmpty<T>, T::Err>
{
	if value.is_empty() {
		return Ok(MaybeEmpty(None));
	}

	value.parse().map(|value| MaybeEmpty(Some(value)))
}

impl Args
{
	/// Applies any overrides specified as CLI flags or environment variables to the given
	/// `config` object.
	///
	/// These take precedence over the configuration file.
	pub fn apply_to_config(self, config: &mut Config)
	{
		if let Some(ip) = self.ip {
			config.http.ip = ip;
		}

		if let Some(port) = self.port {
			config.http.port = port;
		}

		if let Some(url) = self.db_url.and_then(MaybeEmpty::into_inner) {
			config.database.url = Some(url);
		}

		if let Some(host) = self.db_host.and_then(MaybeEmpty::into_inner) {
			config.database.host = host;
		}

		if let Some(port) = self.db_port.and_then(MaybeEmpty::into_inner) {
			config.database.port = port;
		}

		if let Some(name) = self.db_name.and_then(MaybeEmpty::into_inner) {
			config.database.name = name;
		}

		if let Some(user) = self.db_user.and_then(MaybeEmpty::into_inner) {
			config.database.user = user;
		}

		if let Some(password) = self.db_password.and_then(MaybeEmpty::into_inner) {
			config.database.password = password;
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::testing;

	#[test]
	fn flags_override_config() -> testing::Result
	{
		let args = Args::try_parse_from([
			"alertlabel-api",
			"--port",
			"9000",
			"--db-host",
			"db.internal",
			"--db-port",
			"6543",
			"--db-name",
			"alerts",
			"--db-user",
			"alerter",
			"--db-password",
			"hunter2",
		])?;

		let mut config = Config::default();
		args.apply_to_config(&mut config);

		testing::assert_eq!(config.http.port, 9000);
		testing::assert_eq!(config.database.host, "db.internal");
		testing::assert_eq!(config.database.port, 6543);
		testing::assert_eq!(config.database.name, "alerts");
		testing::assert_eq!(config.database.user, "alerter");
		testing::assert_eq!(config.database.password, "hunter2");

		Ok(())
	}

	#[test]
	fn rejects_invalid_port() -> testing::Result
	{
		let result = Args::try_parse_from(["alertlabel-api", "--db-port", "not-a-port"]);

		testing::assert_matches!(result, Err(_));

		Ok(())
	}

	#[test]
	fn empty_values_are_unset() -> testing::Result
	{
		let args = Args::try_parse_from([
			"alertlabel-api",
			"--db-url",
			"",
			"--db-host",
			"",
			"--db-port",
			"",
			"--db-user",
			"",
			"--db-password",
			"",
		])?;

		let mut config = Config::default();
		args.apply_to_config(&mut config);

		testing::assert_eq!(config.database.url, None);
		testing::assert_eq!(config.database.host, Config::default().database.host);
		testing::assert_eq!(config.database.port, Config::default().database.port);
		testing::assert_eq!(config.database.user, Config::default().database.user);
		testing::assert_eq!(config.database.password, Config::default().database.password);

		Ok(())
	}

	#[test]
	fn verify_cli()
	{
		use clap::CommandFactory;

		Args::command().debug_assert();
	}
}
