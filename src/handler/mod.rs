pub mod encoding;
mod responses;

use crate::config::config;
use crate::http::response::HttpResponse;

/// Builds the response served to every connection.
///
/// The body is either the configured document or a generated welcome page,
/// compressed according to the configuration.
pub fn build_response() -> HttpResponse {
    let mut res = match config().document.as_deref() {
        Some(path) => responses::document(path),
        None => responses::welcome(),
    };
    encoding::apply(&mut res);
    res
}
