//! HTTP/1.1 response types and their wire serialization.
//!
//! [`emitter`] owns the byte-exact serialization onto a sink; [`status`],
//! [`headers`] and [`response`] are the typed layer the rest of the crate
//! builds responses with.

pub mod emitter;
pub mod headers;
pub mod response;
pub mod status;
