use std::fs::File;
use std::io::ErrorKind::*;
use std::io::Read;
use std::time::SystemTime;

use crate::config::config;
use crate::http::response::{HttpResponse, ResponseHeader};
use crate::http::status::StatusLine;

pub fn welcome() -> HttpResponse {
    let body = format!("<h1>Welcome to {}!</h1>", config().server_name).into_bytes();
    with_body(StatusLine::ok(), "text/html", body)
}

pub fn forbidden() -> HttpResponse {
    with_body(
        StatusLine::forbidden(),
        "text/html",
        b"<h1>403 Forbidden</h1>".to_vec(),
    )
}

pub fn not_found() -> HttpResponse {
    with_body(
        StatusLine::not_found(),
        "text/html",
        b"<h1>404 Not Found</h1>".to_vec(),
    )
}

pub fn internal_server_error() -> HttpResponse {
    with_body(
        StatusLine::internal_server_error(),
        "text/html",
        b"<h1>500 Internal Server Error</h1>".to_vec(),
    )
}

/// Serves the configured document from disk.
pub fn document(path: &str) -> HttpResponse {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            eprintln!("Fail to open {}: {err}", path);
            return match err.kind() {
                NotFound => not_found(),
                PermissionDenied => forbidden(),
                _ => internal_server_error(),
            };
        }
    };

    let mut body = Vec::new();
    if let Err(err) = file.read_to_end(&mut body) {
        eprintln!("Fail to read {}: {err}", path);
        return internal_server_error();
    }

    with_body(StatusLine::ok(), guess_mime(path), body)
}

// Framing and identification headers are set explicitly on every response;
// nothing is added later during emission.
fn with_body(status: StatusLine, content_type: &str, body: Vec<u8>) -> HttpResponse {
    let mut res = HttpResponse::new();
    res.status = status;

    res.set_header(ResponseHeader::ContentLength, &body.len().to_string());
    res.set_header(ResponseHeader::ContentType, content_type);
    res.set_header(ResponseHeader::Connection, "close");
    res.set_header(ResponseHeader::Server, &config().server_name);
    res.set_header(
        ResponseHeader::Date,
        &httpdate::fmt_http_date(SystemTime::now()),
    );

    res.body = body;
    res
}

fn guess_mime(path: &str) -> &str {
    match path.rsplit('.').next() {
        Some("htm") | Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("json") => "application/json",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
