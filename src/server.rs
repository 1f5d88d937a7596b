//! The HTTP server.

use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::runtime::{self, Runtime};

use crate::config::{Config, RuntimeConfig};
use crate::database::{ConnectionPool, DatabaseError};
use crate::{http, signals, telemetry};

/// Errors that can occur when running the server.
#[derive(Debug, Display, Error)]
pub enum Error
{
	#[display("failed to initialize tracing: {_0}")]
	InitializeTracing(telemetry::InitError),

	#[display("failed to initialize tokio: {_0}")]
	InitializeTokio(io::Error),

	#[display("failed to establish database connection: {_0}")]
	Database(DatabaseError),

	#[display("failed to bind tcp socket: {_0}")]
	BindTcpSocket(io::Error),

	#[display("failed to get tcp local addr: {_0}")]
	GetTcpLocalAddr(io::Error),

	#[display("failed to run http server: {_0}")]
	Serve(io::Error),
}

/// Runs the server until it receives a shutdown signal.
///
/// Failing to connect to the database is fatal; there are no retries.
pub fn run(config: Config) -> Result<(), Error>
{
	let _guard = telemetry::init(&config.tracing).map_err(Error::InitializeTracing)?;

	debug!(?config, "loaded configuration");

	initialize_runtime(&config.runtime)?.block_on(async {
		let pool = ConnectionPool::connect(&config.database)
			.await
			.map_err(Error::Database)?;

		let tcp_listener = TcpListener::bind(config.http.socket_addr())
			.await
			.map_err(Error::BindTcpSocket)?;

		let local_addr = tcp_listener.local_addr().map_err(Error::GetTcpLocalAddr)?;

		info!("listening on '{local_addr}'");

		let service = http::router(pool.clone(), &config.tracing)
			.into_make_service_with_connect_info::<SocketAddr>();

		axum::serve(tcp_listener, service)
			.with_graceful_shutdown(signals::shutdown())
			.await
			.map_err(Error::Serve)?;

		info!("server stopped, closing database connections");
		pool.close().await;

		Ok(())
	})
}

fn initialize_runtime(config: &RuntimeConfig) -> Result<Runtime, Error>
{
	let mut runtime = runtime::Builder::new_multi_thread();

	if let Some(count) = config.worker_threads {
		runtime.worker_threads(count.get());
	}

	runtime.enable_all().build().map_err(Error::InitializeTokio)
}
