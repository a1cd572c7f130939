//! Facet-based document kind dispatch.

use serde::{Deserialize, Serialize};

/// Facet marking a document carrying multiple picture renditions.
pub const FACET_MULTIVIEW_PICTURE: &str = "MultiviewPicture";

/// Facet marking a video document.
pub const FACET_VIDEO: &str = "Video";

/// Facet marking a document with a thumbnail rendition.
pub const FACET_THUMBNAIL: &str = "Thumbnail";

/// Rendering kind of a document, decided once from its facet set and then
/// matched exhaustively by the caption formatter.
///
/// The priority order is fixed and deliberate: a document tagged both `Video`
/// and `MultiviewPicture` is always rendered as a picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocKind {
    /// Has multiple picture renditions; the lightbox rendition is displayed.
    Picture,
    /// Video document; rendered with the placeholder image.
    Video,
    /// Thumbnail-only document; rendered with the placeholder image.
    Thumbnail,
    /// No recognized facet; rendered as a fixed unsupported fragment.
    Unknown,
}

impl DocKind {
    /// Decide the kind from a facet list. First match wins, in the fixed
    /// priority MultiviewPicture > Video > Thumbnail.
    pub fn from_facets<S: AsRef<str>>(facets: &[S]) -> Self {
        let has = |name: &str| facets.iter().any(|f| f.as_ref() == name);

        if has(FACET_MULTIVIEW_PICTURE) {
            DocKind::Picture
        } else if has(FACET_VIDEO) {
            DocKind::Video
        } else if has(FACET_THUMBNAIL) {
            DocKind::Thumbnail
        } else {
            DocKind::Unknown
        }
    }
}
