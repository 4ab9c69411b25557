//! rustywire is a small HTTP/1.1 response emission crate together with the
//! tiny TCP responder built on top of it.
//!
//! The heart of the crate is [`http::emitter`], which serializes a status
//! line, an ordered header block and a body stream onto any asynchronous
//! byte sink, in either fail-fast or latched-error fashion. Everything else
//! (configuration, canned responses, the accept loop) exists to put that
//! emitter on real connections.

pub mod config;
pub mod handler;
pub mod http;
pub mod net;
