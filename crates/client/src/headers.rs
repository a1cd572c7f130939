//! Request headers for the document fetch.
//!
//! The caption formatter needs the `dublincore`, `common`, and `picture`
//! schemas present in the document payload. The host application performs the
//! fetch; this module only contributes the header asking the server to
//! include those schemas in the document representation.

use reqwest::RequestBuilder;
use reqwest::header::{HeaderMap, HeaderValue};

/// Header naming the metadata schemas to include in document responses.
pub const DOCUMENT_PROPERTIES_HEADER: &str = "X-NXDocumentProperties";

/// Schemas the caption formatter requires.
pub const REQUESTED_SCHEMAS: &str = "dublincore, common, picture";

/// Set the document-properties header on an outgoing request's header map.
///
/// Sets exactly this one header; anything else in the map is left untouched.
pub fn set_request_headers(headers: &mut HeaderMap) {
    headers.insert(DOCUMENT_PROPERTIES_HEADER, HeaderValue::from_static(REQUESTED_SCHEMAS));
}

/// Attach the document-properties header to a reqwest request builder.
pub fn with_request_headers(request: RequestBuilder) -> RequestBuilder {
    request.header(DOCUMENT_PROPERTIES_HEADER, REQUESTED_SCHEMAS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_exactly_one_header() {
        let mut headers = HeaderMap::new();
        set_request_headers(&mut headers);

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(DOCUMENT_PROPERTIES_HEADER).unwrap(), "dublincore, common, picture");
    }

    #[test]
    fn test_leaves_other_headers_alone() {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("Authorization", HeaderValue::from_static("Basic abc"));

        set_request_headers(&mut headers);

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("Accept").unwrap(), "application/json");
        assert_eq!(headers.get("Authorization").unwrap(), "Basic abc");
    }

    #[test]
    fn test_idempotent() {
        let mut headers = HeaderMap::new();
        set_request_headers(&mut headers);
        set_request_headers(&mut headers);

        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_request_builder_carries_header() {
        let request = with_request_headers(reqwest::Client::new().get("http://cms.example/api/v1/id/doc"))
            .build()
            .unwrap();

        assert_eq!(request.headers().get(DOCUMENT_PROPERTIES_HEADER).unwrap(), REQUESTED_SCHEMAS);
    }
}
