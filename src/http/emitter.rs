//! Serialization of HTTP/1.1 responses onto an asynchronous byte sink.
//!
//! The wire format is fixed:
//!
//! ```text
//! HTTP/1.1 <code> <reason>\r\n
//! <key>: <value>\r\n
//! ...
//! \r\n
//! <body bytes...>
//! ```
//!
//! Status line, header lines and body bytes are written verbatim, always
//! CRLF-terminated. No framing headers (`Content-Length`,
//! `Transfer-Encoding`) and no default headers (`Date`, `Server`) are
//! injected here; whatever should reach the wire must be supplied by the
//! caller.
//!
//! Two emission strategies exist. [`emit`] checks every write and stops at
//! the first failure. [`emit_latched`] drives the identical write sequence
//! through a [`LatchedSink`], which turns into a no-op after the first
//! failure and hands the captured error back at the end. For a failure at
//! any given write, both leave the same truncated prefix on the wire and
//! surface the same error.

use std::pin::Pin;
use std::task::{Context, Poll};

use async_std::io::{self, Read, Write};
use async_std::prelude::*;
use serde::Deserialize;

use crate::http::headers::HeaderField;
use crate::http::status::StatusLine;

/// Failure propagation strategy used when emitting a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmitStrategy {
    /// Check every write, stop at the first error.
    FailFast,
    /// Swallow writes after the first error, report it once at the end.
    Latched,
}

/// Writes one complete response to `sink`, stopping at the first failed
/// sink write or body read and returning that error unchanged.
///
/// The body is streamed until exhausted; it is consumed either way and
/// cannot be replayed, so a retry means building a fresh response.
pub async fn emit<W, R>(
    sink: &mut W,
    status: &StatusLine,
    headers: &[HeaderField],
    mut body: R,
) -> io::Result<()>
where
    W: Write + Unpin,
    R: Read + Unpin,
{
    let status_line = format!("HTTP/1.1 {} {}\r\n", status.code, status.reason);
    sink.write_all(status_line.as_bytes()).await?;

    for field in headers {
        let line = format!("{}: {}\r\n", field.key, field.value);
        sink.write_all(line.as_bytes()).await?;
    }

    sink.write_all(b"\r\n").await?;

    io::copy(&mut body, sink).await?;
    Ok(())
}

/// Same write sequence as [`emit`], driven through a [`LatchedSink`].
///
/// Every write call nominally succeeds, so the formatting code runs to the
/// end without per-call checks while the sink stops touching the wire after
/// the first failure. The latched error, if any, is returned once the whole
/// sequence has been driven; a body read error is surfaced only when no
/// write error was latched before it.
pub async fn emit_latched<W, R>(
    sink: &mut W,
    status: &StatusLine,
    headers: &[HeaderField],
    mut body: R,
) -> io::Result<()>
where
    W: Write + Unpin,
    R: Read + Unpin,
{
    let mut sink = LatchedSink::new(sink);

    let status_line = format!("HTTP/1.1 {} {}\r\n", status.code, status.reason);
    let _ = sink.write_all(status_line.as_bytes()).await;

    for field in headers {
        let line = format!("{}: {}\r\n", field.key, field.value);
        let _ = sink.write_all(line.as_bytes()).await;
    }

    let _ = sink.write_all(b"\r\n").await;

    let copied = io::copy(&mut body, &mut sink).await;

    match sink.into_error() {
        Some(err) => Err(err),
        None => copied.map(|_| ()),
    }
}

/// Sink decorator that latches the first write error.
///
/// Until a failure occurs every call is forwarded to the wrapped sink. From
/// the first failure on, writes claim success while consuming their input
/// without touching the wrapped sink, and the error is kept for later
/// retrieval. Call sites chaining many small writes get a single error
/// check at the end instead of one per call.
pub struct LatchedSink<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W> LatchedSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    /// First error observed on the wrapped sink, if any.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Consumes the decorator, yielding the latched error.
    pub fn into_error(self) -> Option<io::Error> {
        self.error
    }
}

impl<W: Write + Unpin> Write for LatchedSink<W> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.get_mut();
        if this.error.is_some() {
            return Poll::Ready(Ok(buf.len()));
        }
        match Pin::new(&mut this.inner).poll_write(cx, buf) {
            Poll::Ready(Err(err)) => {
                this.error = Some(err);
                Poll::Ready(Ok(buf.len()))
            }
            other => other,
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        if this.error.is_some() {
            return Poll::Ready(Ok(()));
        }
        match Pin::new(&mut this.inner).poll_flush(cx) {
            Poll::Ready(Err(err)) => {
                this.error = Some(err);
                Poll::Ready(Ok(()))
            }
            other => other,
        }
    }

    fn poll_close(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        if this.error.is_some() {
            return Poll::Ready(Ok(()));
        }
        match Pin::new(&mut this.inner).poll_close(cx) {
            Poll::Ready(Err(err)) => {
                this.error = Some(err);
                Poll::Ready(Ok(()))
            }
            other => other,
        }
    }
}
