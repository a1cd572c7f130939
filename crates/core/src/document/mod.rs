//! CMS document model.
//!
//! Mirrors the JSON representation the CMS REST API returns for a document
//! when the `dublincore`, `common`, and `picture` schemas are requested (the
//! client crate's header injection asks for exactly those). All accessors
//! take `&self`; formatting never mutates a document.

mod kind;

pub use kind::{DocKind, FACET_MULTIVIEW_PICTURE, FACET_THUMBNAIL, FACET_VIDEO};

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Metadata property carrying the creation date.
pub const PROP_CREATED: &str = "dc:created";

/// Metadata property carrying the description. Nullable.
pub const PROP_DESCRIPTION: &str = "dc:description";

/// Metadata property carrying the creator.
pub const PROP_CREATOR: &str = "dc:creator";

/// Metadata property carrying the ordered picture renditions.
pub const PROP_PICTURE_VIEWS: &str = "picture:views";

/// Index into `picture:views` of the rendition large enough for lightbox display.
pub const LIGHTBOX_VIEW_INDEX: usize = 4;

/// A CMS document as returned by the REST API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document title.
    #[serde(default)]
    pub title: String,

    /// Capability tags attached to the document.
    #[serde(default)]
    pub facets: Vec<String>,

    /// Schema-qualified metadata properties.
    #[serde(default)]
    pub properties: Properties,
}

/// Schema-qualified metadata properties of a document.
///
/// Keys are `schema:field` pairs (`dc:title`, `picture:views`, ...). Values
/// keep their raw JSON shape; typed accessors live on [`Document`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(HashMap<String, Value>);

impl Properties {
    /// Raw JSON value of a property, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of a property. JSON `null` and non-string values read as
    /// absent, never as the literal text "null".
    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Whether the map carries no properties at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// One pre-computed rendition of a picture document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PictureView {
    /// Rendition name (`Thumbnail`, `Medium`, `OriginalJpeg`, ...).
    #[serde(default)]
    pub title: Option<String>,

    /// Rendition width in pixels.
    #[serde(default)]
    pub width: Option<u32>,

    /// Rendition height in pixels.
    #[serde(default)]
    pub height: Option<u32>,

    /// Stored content of the rendition.
    pub content: ViewContent,
}

/// Stored content of a rendition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewContent {
    /// URL of the rendition data.
    pub data: String,
}

impl Document {
    /// Rendering kind, decided once from the facet set.
    pub fn kind(&self) -> DocKind {
        DocKind::from_facets(&self.facets)
    }

    /// Raw `dc:created` value, if present.
    pub fn created_raw(&self) -> Option<&str> {
        self.properties.str(PROP_CREATED)
    }

    /// Creation date parsed from `dc:created`.
    ///
    /// The CMS serializes creation dates as RFC 3339 timestamps; plain
    /// `YYYY-MM-DD` values are accepted as a fallback.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingProperty` when the property is absent and
    /// `Error::InvalidDate` when its value does not parse as a date.
    pub fn created(&self) -> Result<NaiveDate, Error> {
        let raw = self.created_raw().ok_or(Error::MissingProperty(PROP_CREATED))?;

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.date_naive());
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| Error::InvalidDate(raw.to_string()))
    }

    /// `dc:description`, with JSON `null` normalized to absent.
    pub fn description(&self) -> Option<&str> {
        self.properties.str(PROP_DESCRIPTION)
    }

    /// `dc:creator`, if present.
    pub fn creator(&self) -> Option<&str> {
        self.properties.str(PROP_CREATOR)
    }

    /// Ordered picture renditions from `picture:views`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingProperty` when the property is absent and
    /// `Error::InvalidProperty` when it does not deserialize as a rendition
    /// list.
    pub fn picture_views(&self) -> Result<Vec<PictureView>, Error> {
        let raw = self
            .properties
            .get(PROP_PICTURE_VIEWS)
            .ok_or(Error::MissingProperty(PROP_PICTURE_VIEWS))?;

        serde_json::from_value(raw.clone())
            .map_err(|e| Error::InvalidProperty { field: PROP_PICTURE_VIEWS, reason: e.to_string() })
    }

    /// URL of the rendition used for lightbox display (the 5th entry of
    /// `picture:views`).
    ///
    /// # Errors
    ///
    /// Propagates `picture_views` errors and returns `Error::MissingRendition`
    /// when the list is shorter than [`LIGHTBOX_VIEW_INDEX`] + 1.
    pub fn lightbox_view_url(&self) -> Result<String, Error> {
        let views = self.picture_views()?;
        let len = views.len();

        views
            .into_iter()
            .nth(LIGHTBOX_VIEW_INDEX)
            .map(|view| view.content.data)
            .ok_or(Error::MissingRendition { index: LIGHTBOX_VIEW_INDEX, len })
    }
}
