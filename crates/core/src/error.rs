//! Unified error types for the lightbox caption formatter.

/// Errors from strict document property access.
///
/// The rendering path never surfaces these to callers: `format_doc` always
/// returns a fragment, degrading to placeholders and logging the cause. The
/// typed errors exist for the accessor API on [`crate::Document`] and for the
/// date parser.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required metadata property is absent from the document.
    #[error("missing property: {0}")]
    MissingProperty(&'static str),

    /// A property is present but does not have the expected shape.
    #[error("invalid property {field}: {reason}")]
    InvalidProperty { field: &'static str, reason: String },

    /// `picture:views` has no rendition at the requested index.
    #[error("no picture rendition at index {index} ({len} available)")]
    MissingRendition { index: usize, len: usize },

    /// A `dc:created` value could not be parsed as a date.
    #[error("unparseable creation date: {0}")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingRendition { index: 4, len: 2 };
        assert_eq!(err.to_string(), "no picture rendition at index 4 (2 available)");

        let err = Error::MissingProperty("picture:views");
        assert!(err.to_string().contains("picture:views"));
    }
}
