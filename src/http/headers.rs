//! Header abstractions for [`HttpResponse`](crate::http::response::HttpResponse)
//! and the [`emitter`](crate::http::emitter).
//!
//! The emitter consumes a plain ordered sequence of [`HeaderField`]s, where
//! duplicate keys are legal and meaningful and nothing is normalized.
//! [`HttpHeaders`] is the convenience builder the rest of the crate
//! assembles responses with: an insertion-ordered name/value map where
//! setting an existing name replaces its value in place. Both names and
//! values are raw strings; no validation or escaping is applied anywhere on
//! this path.

use indexmap::IndexMap;

/// A single header line, emitted verbatim as `key: value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub key: String,
    pub value: String,
}

impl HeaderField {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

pub struct HttpHeaders {
    headers: IndexMap<String, String>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    pub fn set_raw(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&String> {
        self.headers.get(name)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Flattens the map into the ordered field sequence the emitter consumes.
    pub fn to_fields(&self) -> Vec<HeaderField> {
        self.headers
            .iter()
            .map(|(name, value)| HeaderField::new(name, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut headers = HttpHeaders::new();
        headers.set_raw("Content-Type", "text/html");
        headers.set_raw("Content-Length", "12");
        headers.set_raw("Connection", "close");

        let fields = headers.to_fields();
        assert_eq!(fields[0], HeaderField::new("Content-Type", "text/html"));
        assert_eq!(fields[1], HeaderField::new("Content-Length", "12"));
        assert_eq!(fields[2], HeaderField::new("Connection", "close"));
    }

    #[test]
    fn test_set_replaces_value_in_place() {
        let mut headers = HttpHeaders::new();
        headers.set_raw("Content-Length", "12");
        headers.set_raw("Content-Type", "text/html");
        headers.set_raw("Content-Length", "48");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Content-Length"), Some(&"48".to_string()));
        // Still first: replacing must not move the entry to the back.
        assert_eq!(headers.to_fields()[0].key, "Content-Length");
    }

    #[test]
    fn test_get_missing_header() {
        let headers = HttpHeaders::new();
        assert!(headers.is_empty());
        assert_eq!(headers.get("Host"), None);
    }
}
