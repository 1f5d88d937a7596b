pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// An error returned by the database driver.
///
/// The message is forwarded verbatim, including to HTTP clients.
#[derive(Debug, Display, Error, From)]
#[display("{_0}")]
pub struct DatabaseError(sqlx::Error);

impl DatabaseError
{
	/// Returns whether this error was caused by a `PK` / `UNIQUE` constraint violation.
	pub fn is_unique_violation(&self) -> bool
	{
		self.0
			.as_database_error()
			.is_some_and(|error| error.is_unique_violation())
	}
}
