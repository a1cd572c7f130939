//! Lightbox caption rendering.
//!
//! Builds the HTML caption fragment the lightbox widget displays over a
//! document's image. Rendering dispatches on the document's [`DocKind`] and
//! funnels every recognized kind through one shared template; the markup
//! keeps the widget's class contract (`mfp-figure`, `mfp-img`,
//! `mfp-bottom-bar`, `mfp-title`, `mfp-counter`).
//!
//! Rendering is fail-soft: every path returns a well-formed fragment. Missing
//! renditions and unparseable dates degrade to placeholders and a warning,
//! never an error.

use lightbox_core::document::{DocKind, Document};
use lightbox_core::{AppConfig, Error};
use url::Url;

use crate::locale::{LocaleProvider, format_created};

/// Horizontal margin reserved for lightbox chrome, in pixels.
const CHROME_MARGIN_W: u32 = 120;

/// Vertical margin reserved for lightbox chrome, in pixels.
const CHROME_MARGIN_H: u32 = 80;

/// Fragment returned for documents with no recognized facet.
const UNSUPPORTED_FRAGMENT: &str = "<div><h3>Not supported yet!</h3></div>";

/// Current viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Largest image box that still leaves room for the lightbox chrome.
    fn image_bounds(self) -> (u32, u32) {
        (self.width.saturating_sub(CHROME_MARGIN_W), self.height.saturating_sub(CHROME_MARGIN_H))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280, height: 720 }
    }
}

/// Source of the current viewport size.
///
/// Queried at every render call, never cached, so the layout adapts to window
/// resizes between calls.
pub trait ViewportSource: Send + Sync {
    /// Current viewport dimensions.
    fn size(&self) -> Viewport;
}

/// Viewport source with a fixed size.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedViewport(pub Viewport);

impl ViewportSource for FixedViewport {
    fn size(&self) -> Viewport {
        self.0
    }
}

/// Renders lightbox caption fragments from CMS documents.
///
/// Holds the application config plus injected locale and viewport
/// capabilities; the caching lifetime of the locale is the provider's
/// concern (see [`crate::locale::CookieLocale`]).
pub struct CaptionFormatter {
    config: AppConfig,
    locale: Box<dyn LocaleProvider>,
    viewport: Box<dyn ViewportSource>,
}

impl CaptionFormatter {
    /// Create a formatter with explicit locale and viewport capabilities.
    pub fn new(config: AppConfig, locale: Box<dyn LocaleProvider>, viewport: Box<dyn ViewportSource>) -> Self {
        Self { config, locale, viewport }
    }

    /// Render the caption fragment for a document.
    ///
    /// Dispatches on the document's kind; the priority among facets is fixed
    /// in [`DocKind::from_facets`]. Always returns a fragment, whatever the
    /// document carries.
    pub fn format_doc(&self, doc: &Document) -> String {
        match doc.kind() {
            DocKind::Picture => self.format_picture_doc(doc),
            DocKind::Video => self.format_video_doc(doc),
            DocKind::Thumbnail => self.format_default_doc(doc),
            DocKind::Unknown => self.format_unknown_doc(doc),
        }
    }

    /// Render a picture document using its lightbox rendition.
    ///
    /// Documents advertising the facet but missing the rendition, or carrying
    /// a rendition URL that does not parse, degrade to the placeholder image.
    pub fn format_picture_doc(&self, doc: &Document) -> String {
        let image_url = match doc.lightbox_view_url() {
            Ok(url) if displayable_url(&url) => url,
            Ok(url) => {
                tracing::warn!(title = %doc.title, url = %url, "unusable rendition URL, using placeholder");
                self.config.empty_picture_url()
            }
            Err(err) => {
                tracing::warn!(title = %doc.title, %err, "no lightbox rendition, using placeholder");
                self.config.empty_picture_url()
            }
        };

        self.caption_markup(doc, &image_url)
    }

    /// Render a video document. Videos carry no picture rendition, so the
    /// placeholder image built from the configured base path is shown.
    pub fn format_video_doc(&self, doc: &Document) -> String {
        self.caption_markup(doc, &self.config.empty_picture_url())
    }

    /// Render a thumbnail-only document with the placeholder image.
    pub fn format_default_doc(&self, doc: &Document) -> String {
        self.caption_markup(doc, &self.config.empty_picture_url())
    }

    /// Fixed fragment for unrecognized document kinds. Ignores the document's
    /// content entirely.
    pub fn format_unknown_doc(&self, _doc: &Document) -> String {
        UNSUPPORTED_FRAGMENT.to_string()
    }

    /// Shared caption template.
    ///
    /// Emits the image sized to the current viewport minus chrome margins, a
    /// title bar with the description as a secondary line (empty when the
    /// document has none), and a "creator, localized date" footer. All
    /// document text is escaped so the fragment stays well-formed.
    fn caption_markup(&self, doc: &Document, image_url: &str) -> String {
        let (max_width, max_height) = self.viewport.size().image_bounds();

        let created = match doc.created() {
            Ok(date) => {
                let tag = self.locale.current().or(self.config.default_locale.as_deref());
                format_created(date, tag)
            }
            Err(Error::MissingProperty(_)) => String::new(),
            Err(err) => {
                tracing::warn!(title = %doc.title, %err, "omitting creation date");
                String::new()
            }
        };

        format!(
            "<div class=\"mfp-figure\"><figure>\
             <img class=\"mfp-img\" src=\"{src}\" style=\"max-width:{max_width}px;max-height:{max_height}px\">\
             <figcaption><div class=\"mfp-bottom-bar\">\
             <div class=\"mfp-title\">{title}<small>{description}</small></div>\
             <div class=\"mfp-counter\">{creator} {created}</div>\
             </div></figcaption></figure></div>",
            src = escape_html(image_url),
            title = escape_html(&doc.title),
            description = doc.description().map(escape_html).unwrap_or_default(),
            creator = doc.creator().map(escape_html).unwrap_or_default(),
        )
    }
}

/// Whether a rendition URL can be handed to the lightbox: an absolute URL or
/// a root-relative path.
fn displayable_url(url: &str) -> bool {
    url.starts_with('/') || Url::parse(url).is_ok()
}

/// Escape text for interpolation into an HTML fragment.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
