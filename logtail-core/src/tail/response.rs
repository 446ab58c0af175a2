use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header};
use tokio::fs;

/// Total size of the tailed file, sent so clients can track growth between polls.
pub const FILE_LENGTH_HEADER: HeaderName = HeaderName::from_static("logtail-file-length");

pub enum TailBody {
    Empty,
    /// Redacted window, already read into memory.
    Bytes { bytes: Bytes, limit: u64 },
    /// Live file handle positioned at the window start.
    File { file: fs::File, limit: u64 },
}

impl std::fmt::Debug for TailBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TailBody::Empty => f.write_str("Empty"),
            TailBody::Bytes { bytes, limit } => f
                .debug_struct("Bytes")
                .field("len", &bytes.len())
                .field("limit", limit)
                .finish(),
            TailBody::File { limit, .. } => f.debug_struct("File").field("limit", limit).finish(),
        }
    }
}

#[derive(Debug)]
pub struct TailResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: TailBody,
}

impl TailResponse {
    pub(crate) fn empty(status: StatusCode, headers: HeaderBuilder) -> Self {
        let mut headers = headers;
        // 204 responses must not carry a Content-Length.
        if status != StatusCode::NO_CONTENT {
            headers.content_length(0);
        }
        Self {
            status,
            headers: headers.build(),
            body: TailBody::Empty,
        }
    }

    pub fn file_length(&self) -> Option<u64> {
        self.headers
            .get(FILE_LENGTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
    }
}

#[derive(Debug, Default)]
pub(crate) struct HeaderBuilder {
    headers: HeaderMap,
}

impl HeaderBuilder {
    /// Inserts a header, dropping it when the value is not a valid header value.
    pub(crate) fn insert(&mut self, header_name: HeaderName, value: &str) {
        match HeaderValue::from_str(value) {
            Ok(v) if !v.is_empty() => {
                self.headers.insert(header_name, v);
            }
            _ => {
                self.headers.remove(header_name);
            }
        }
    }

    pub(crate) fn file_length(&mut self, len: u64) {
        self.insert(FILE_LENGTH_HEADER, &len.to_string());
    }

    pub(crate) fn content_length(&mut self, len: u64) {
        self.insert(header::CONTENT_LENGTH, &len.to_string());
    }

    /// Windows are raw bytes and may split a multi-byte character, so no charset is claimed.
    pub(crate) fn plain_text(&mut self) {
        self.insert(header::CONTENT_TYPE, "text/plain");
    }

    pub(crate) fn build(self) -> HeaderMap {
        self.headers
    }
}
