//! Core TCP serving loop.
//!
//! This module is responsible only for networking concerns: accepting
//! connections and getting response bytes onto them. Response construction
//! is delegated to [`handler`](crate::handler) and the wire serialization
//! to [`http::emitter`](crate::http::emitter).
//!
//! Each accepted connection is answered with one configured response and
//! closed; no request bytes are read. The server is fully asynchronous and
//! leverages the `async-std` crate for non-blocking I/O and concurrent
//! client handling.
//!
//! The emitter itself carries no deadline, so the write is bounded here by
//! the configured timeout on the connection; expiry surfaces like any other
//! write failure. A failed or expired write leaves a truncated response on
//! the wire, which the peer observes as a closed connection.

use async_std::future;
use async_std::net::{TcpListener, TcpStream};
use async_std::task;

use crate::config::config;
use crate::handler;

pub struct Server;

impl Server {
    /// Starts the server by binding to the configured address and port.
    ///
    /// Runs indefinitely, accepting incoming TCP connections and spawning
    /// an asynchronous task for each client.
    pub async fn run(&self) -> std::io::Result<()> {
        let listener = TcpListener::bind((config().address, config().port)).await?;

        while let Ok((stream, _addr)) = listener.accept().await {
            task::spawn(Self::handle_client(stream));
        }

        Ok(())
    }

    /// Answers a single client connection and closes it.
    async fn handle_client(mut stream: TcpStream) {
        let response = handler::build_response();
        let write = response.write_to(&mut stream, config().emit_strategy);

        match future::timeout(config().write_timeout, write).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => eprintln!("I/O error while writing response: {err}"),
            Err(_) => eprintln!(
                "Response write timed out after {:?}",
                config().write_timeout
            ),
        }
    }
}
