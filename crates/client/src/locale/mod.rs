//! Locale resolution for caption dates.
//!
//! The CMS front end stores the user's locale choice in the
//! `org.jboss.seam.core.Locale` cookie. Resolution is read-once: a
//! [`CookieLocale`] provider reads the cookie on first access and serves the
//! cached value (a cached absence included) for its whole lifetime, even when
//! the backing cookie changes. Callers wanting fresh reads construct a fresh
//! provider.

mod date;

pub use date::format_created;

use std::sync::OnceLock;

/// Name of the cookie carrying the user's locale preference.
pub const LOCALE_COOKIE: &str = "org.jboss.seam.core.Locale";

/// Source of ambient request cookies.
pub trait CookieSource: Send + Sync {
    /// Value of the named cookie, if present.
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Cookie source backed by a raw `Cookie:` request header value.
#[derive(Debug, Clone, Default)]
pub struct HeaderCookies {
    header: String,
}

impl HeaderCookies {
    /// Wrap a `Cookie:` header value (`name=value; other=value`).
    pub fn new(header: impl Into<String>) -> Self {
        Self { header: header.into() }
    }
}

impl CookieSource for HeaderCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        self.header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.trim().to_string())
    }
}

/// Provider of the locale tag used for date localization.
///
/// Implementations decide the caching lifetime; the formatter only asks for
/// the current tag.
pub trait LocaleProvider: Send + Sync {
    /// Current locale tag, if any.
    fn current(&self) -> Option<&str>;
}

/// Read-once locale provider backed by a cookie source.
///
/// The first `current()` call reads [`LOCALE_COOKIE`] and caches the result;
/// every later call serves the cache without touching the source again. An
/// absent cookie is cached as an absence, not retried. Initialization is
/// idempotent: a concurrent first access at worst reads the cookie twice.
pub struct CookieLocale<S: CookieSource> {
    source: S,
    cached: OnceLock<Option<String>>,
}

impl<S: CookieSource> CookieLocale<S> {
    /// Create a provider over the given cookie source.
    pub fn new(source: S) -> Self {
        Self { source, cached: OnceLock::new() }
    }
}

impl<S: CookieSource> LocaleProvider for CookieLocale<S> {
    fn current(&self) -> Option<&str> {
        self.cached
            .get_or_init(|| {
                let value = self.source.cookie(LOCALE_COOKIE);
                tracing::debug!(locale = ?value, "resolved locale cookie");
                value
            })
            .as_deref()
    }
}

/// Provider with a fixed, explicit locale (or none at all).
#[derive(Debug, Clone, Default)]
pub struct FixedLocale(Option<String>);

impl FixedLocale {
    /// Provider that always yields the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    /// Provider that yields no locale, deferring to downstream fallbacks.
    pub fn none() -> Self {
        Self(None)
    }
}

impl LocaleProvider for FixedLocale {
    fn current(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Cookie source whose backing value can change between reads.
    struct MutableCookies {
        value: Mutex<Option<String>>,
        reads: AtomicUsize,
    }

    impl MutableCookies {
        fn new(value: Option<&str>) -> Self {
            Self { value: Mutex::new(value.map(String::from)), reads: AtomicUsize::new(0) }
        }

        fn set(&self, value: Option<&str>) {
            *self.value.lock().unwrap() = value.map(String::from);
        }
    }

    impl CookieSource for &MutableCookies {
        fn cookie(&self, _name: &str) -> Option<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.value.lock().unwrap().clone()
        }
    }

    #[test]
    fn test_header_cookies_lookup() {
        let cookies = HeaderCookies::new("JSESSIONID=abc123; org.jboss.seam.core.Locale=fr; theme=dark");
        assert_eq!(cookies.cookie(LOCALE_COOKIE), Some("fr".to_string()));
        assert_eq!(cookies.cookie("theme"), Some("dark".to_string()));
        assert_eq!(cookies.cookie("missing"), None);
    }

    #[test]
    fn test_header_cookies_empty() {
        let cookies = HeaderCookies::default();
        assert_eq!(cookies.cookie(LOCALE_COOKIE), None);
    }

    #[test]
    fn test_cookie_locale_caches_first_value() {
        let backing = MutableCookies::new(Some("fr"));
        let provider = CookieLocale::new(&backing);

        assert_eq!(provider.current(), Some("fr"));
        backing.set(Some("de"));
        assert_eq!(provider.current(), Some("fr"));
        assert_eq!(backing.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cookie_locale_caches_absence() {
        let backing = MutableCookies::new(None);
        let provider = CookieLocale::new(&backing);

        assert_eq!(provider.current(), None);
        backing.set(Some("fr"));
        assert_eq!(provider.current(), None);
        assert_eq!(backing.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fresh_provider_sees_new_value() {
        let backing = MutableCookies::new(Some("fr"));
        assert_eq!(CookieLocale::new(&backing).current(), Some("fr"));

        backing.set(Some("de"));
        assert_eq!(CookieLocale::new(&backing).current(), Some("de"));
    }

    #[test]
    fn test_fixed_locale() {
        assert_eq!(FixedLocale::new("en_US").current(), Some("en_US"));
        assert_eq!(FixedLocale::none().current(), None);
    }
}
