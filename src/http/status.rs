/// Status line of an HTTP/1.1 response.
///
/// `code` and `reason` are emitted verbatim. No range or character checks
/// are performed; callers are trusted to supply sensible values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub code: u16,
    pub reason: String,
}

impl StatusLine {
    pub fn new(code: u16, reason: &str) -> Self {
        Self {
            code,
            reason: reason.to_string(),
        }
    }

    pub fn ok() -> Self {
        Self::new(200, "OK")
    }

    pub fn forbidden() -> Self {
        Self::new(403, "Forbidden")
    }

    pub fn not_found() -> Self {
        Self::new(404, "Not Found")
    }

    pub fn internal_server_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}
