use std::num::NonZero;
use std::{fmt, thread};

use serde::{Deserialize, Deserializer};
use url::Url;

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DatabaseConfig
{
	/// A full connection URL.
	///
	/// If this is set, the individual connection fields below are ignored.
	pub url: Option<Url>,

	pub host: String,

	#[serde(default = "default_port")]
	pub port: u16,

	pub name: String,
	pub user: String,
	pub password: String,

	/// The amount of connections to open immediately.
	pub min_connections: u32,

	/// The maximum amount of connections to open at once.
	///
	/// Defaults to 1 connection per available CPU core.
	#[serde(deserialize_with = "deserialize_max_connections")]
	pub max_connections: NonZero<u32>,
}

impl DatabaseConfig
{
	/// Returns the URL we should connect to.
	///
	/// Without an explicit [`url`](Self::url), it is composed as
	/// `postgres://{user}:{password}@{host}:{port}/{name}?sslmode=disable`.
	/// User and password are percent-encoded.
	pub fn url(&self) -> Result<Url, url::ParseError>
	{
		if let Some(ref url) = self.url {
			return Ok(url.clone());
		}

		let mut url = Url::parse("postgres://localhost")?;

		url.set_host(Some(&self.host))?;

		// these only fail for URLs without a host
		url.set_port(Some(self.port))
			.map_err(|()| url::ParseError::EmptyHost)?;
		url.set_username(&self.user)
			.map_err(|()| url::ParseError::EmptyHost)?;

		if !self.password.is_empty() {
			url.set_password(Some(&self.password))
				.map_err(|()| url::ParseError::EmptyHost)?;
		}

		url.set_path(&self.name);
		url.query_pairs_mut().append_pair("sslmode", "disable");

		Ok(url)
	}
}

impl Default for DatabaseConfig
{
	fn default() -> Self
	{
		Self {
			url: None,
			host: String::from("localhost"),
			port: default_port(),
			name: String::from("postgres"),
			user: String::from("postgres"),
			password: String::new(),
			min_connections: 0,
			max_connections: default_max_connections(),
		}
	}
}

impl fmt::Debug for DatabaseConfig
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt.debug_struct("DatabaseConfig")
			.field("url", &self.url.as_ref().map(redacted))
			.field("host", &self.host)
			.field("port", &self.port)
			.field("name", &self.name)
			.field("user", &self.user)
			.field("min_connections", &self.min_connections)
			.field("max_connections", &self.max_connections)
			.finish_non_exhaustive()
	}
}

fn default_port() -> u16
{
	5432
}

/// By default, we want to open 1 database connection per available CPU core, with a minimum of
/// 1 if the core count cannot be detected for any reason.
fn default_max_connections() -> NonZero<u32>
{
	thread::available_parallelism()
		.ok()
		.and_then(|count| NonZero::<u32>::try_from(count).ok())
		.unwrap_or(NonZero::<u32>::MIN)
}

fn deserialize_max_connections<'de, D>(deserializer: D) -> Result<NonZero<u32>, D::Error>
where
	D: Deserializer<'de>,
{
	<Option<u32> as Deserialize<'de>>::deserialize(deserializer)
		.map(|maybe_num| maybe_num.and_then(NonZero::new).unwrap_or_else(default_max_connections))
}

/// Strips the password from a URL so it can be logged.
fn redacted(url: &Url) -> String
{
	let mut url = url.clone();

	if url.password().is_some() {
		_ = url.set_password(Some("*****"));
	}

	url.into()
}
