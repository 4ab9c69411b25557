use flate2::Compression;
use flate2::write::{DeflateEncoder, GzEncoder};
use serde::Deserialize;
use std::io::Write;

use crate::config::config;
use crate::http::response::{HttpResponse, ResponseHeader};

/// Body compression applied before emission.
///
/// There is no content negotiation here; the algorithm comes from the
/// configuration, and the matching `Content-Encoding` header is set on the
/// response so clients know what they received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionAlgorithm {
    Gzip,
    Deflate,
    Identity,
}

impl CompressionAlgorithm {
    pub fn as_str(&self) -> &str {
        match self {
            CompressionAlgorithm::Gzip => "gzip",
            CompressionAlgorithm::Deflate => "deflate",
            CompressionAlgorithm::Identity => "identity",
        }
    }
}

pub fn apply(res: &mut HttpResponse) {
    let algo = config().compression;
    if algo == CompressionAlgorithm::Identity {
        return;
    }

    if let Err(err) = compress_body(res, algo) {
        eprintln!("Compression IO error: {}", err);
    }
}

fn compress_body(res: &mut HttpResponse, algo: CompressionAlgorithm) -> std::io::Result<()> {
    match algo {
        CompressionAlgorithm::Gzip => {
            let mut e = GzEncoder::new(Vec::new(), Compression::default());
            e.write_all(&res.body)?;
            res.body = e.finish()?;
        }
        CompressionAlgorithm::Deflate => {
            let mut e = DeflateEncoder::new(Vec::new(), Compression::default());
            e.write_all(&res.body)?;
            res.body = e.finish()?;
        }
        CompressionAlgorithm::Identity => return Ok(()),
    }

    res.set_header(ResponseHeader::ContentEncoding, algo.as_str());
    res.set_header(ResponseHeader::ContentLength, &res.body.len().to_string());
    Ok(())
}
