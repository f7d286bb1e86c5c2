//! Request building blocks: content type, body and query string

use std::fmt::{self, Display};

use reqwest::multipart::Form;

/// Content type chosen by the caller for a request.
///
/// `Multipart` sets no header of its own; the transport adds
/// `multipart/form-data` together with the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Multipart,
}

impl ContentType {
    pub fn header_value(self) -> Option<&'static str> {
        match self {
            ContentType::Json => Some("application/json"),
            ContentType::Multipart => None,
        }
    }
}

pub enum RequestBody {
    Empty,
    /// Pre-serialized JSON text
    Json(Vec<u8>),
    Multipart(Form),
}

impl RequestBody {
    pub fn kind(&self) -> &'static str {
        match self {
            RequestBody::Empty => "empty",
            RequestBody::Json(_) => "json",
            RequestBody::Multipart(_) => "multipart",
        }
    }
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestBody::Json(bytes) => write!(f, "Json({} bytes)", bytes.len()),
            other => f.write_str(other.kind()),
        }
    }
}

/// Query string built from optional parameters.
///
/// Absent values are skipped; present values are appended as written,
/// in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param<V: Display>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.pairs.push((key, v.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Append the query string to `path`
    pub fn apply(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let query = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_skips_missing_params() {
        let query = Query::new()
            .param("directory", None::<&str>)
            .param("recursive", Some(true));
        assert_eq!(query.apply("/api/files/list"), "/api/files/list?recursive=true");
    }

    #[test]
    fn test_query_appends_literally() {
        let query = Query::new()
            .param("directory", Some("/tmp"))
            .param("recursive", Some(true));
        assert_eq!(
            query.apply("/api/files/list"),
            "/api/files/list?directory=/tmp&recursive=true"
        );
    }

    #[test]
    fn test_empty_query_leaves_path() {
        let query = Query::new().param("limit", None::<u32>);
        assert!(query.is_empty());
        assert_eq!(query.apply("/api/history"), "/api/history");
    }

    #[test]
    fn test_multipart_has_no_header_value() {
        assert_eq!(ContentType::Json.header_value(), Some("application/json"));
        assert_eq!(ContentType::Multipart.header_value(), None);
    }
}
