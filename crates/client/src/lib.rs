//! Client-side caption formatting for the CMS lightbox.
//!
//! This crate turns CMS document metadata into the HTML caption fragment the
//! lightbox widget displays over an image, and contributes the request header
//! the host application's document fetch must carry so the needed metadata
//! schemas are present in the payload.

pub mod caption;
pub mod headers;
pub mod locale;

pub use caption::{CaptionFormatter, FixedViewport, Viewport, ViewportSource};
pub use headers::{DOCUMENT_PROPERTIES_HEADER, REQUESTED_SCHEMAS, set_request_headers, with_request_headers};
pub use locale::{CookieLocale, CookieSource, FixedLocale, HeaderCookies, LOCALE_COOKIE, LocaleProvider};
