use async_std::io::{self, Write};

use crate::http::emitter::{self, EmitStrategy};
use crate::http::headers::HttpHeaders;
use crate::http::status::StatusLine;

/// Response headers settable through the typed [`HttpResponse`] API.
pub enum ResponseHeader {
    ContentLength,
    ContentType,
    ContentEncoding,
    Connection,
    Date,
    Server,
}

pub struct HttpResponse {
    pub status: StatusLine,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new() -> Self {
        Self {
            status: StatusLine::ok(),
            headers: HttpHeaders::new(),
            body: Vec::new(),
        }
    }

    /// Sets a response header constrained to the [`ResponseHeader`] variants.
    ///
    /// Acts as a safe wrapper around [`HttpHeaders::set_raw`]; the value
    /// itself is not validated.
    pub fn set_header(&mut self, h: ResponseHeader, value: &str) {
        let name = match h {
            ResponseHeader::ContentLength => "Content-Length",
            ResponseHeader::ContentType => "Content-Type",
            ResponseHeader::ContentEncoding => "Content-Encoding",
            ResponseHeader::Connection => "Connection",
            ResponseHeader::Date => "Date",
            ResponseHeader::Server => "Server",
        };

        self.headers.set_raw(name, value);
    }

    /// Serializes the whole response onto `sink` with the chosen strategy.
    ///
    /// Nothing is added on the way out: the headers present on the response
    /// are the headers that reach the wire, in insertion order.
    pub async fn write_to<W>(&self, sink: &mut W, strategy: EmitStrategy) -> io::Result<()>
    where
        W: Write + Unpin,
    {
        let fields = self.headers.to_fields();
        match strategy {
            EmitStrategy::FailFast => {
                emitter::emit(sink, &self.status, &fields, &self.body[..]).await
            }
            EmitStrategy::Latched => {
                emitter::emit_latched(sink, &self.status, &fields, &self.body[..]).await
            }
        }
    }
}
