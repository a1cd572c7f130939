//! Localized date formatting for the caption footer.

use chrono::{Locale, NaiveDate};

/// Format a date in the preferred representation of the given locale tag,
/// falling back to the POSIX locale for unknown or absent tags.
pub fn format_created(date: NaiveDate, locale_tag: Option<&str>) -> String {
    date.format_localized("%x", resolve_locale(locale_tag)).to_string()
}

/// Map a locale tag (cookie value such as `fr`, `en_US`, or `pt-BR`) to a
/// chrono locale.
fn resolve_locale(tag: Option<&str>) -> Locale {
    let Some(tag) = tag else { return Locale::POSIX };

    let normalized = tag.trim().replace('-', "_");
    if let Ok(locale) = Locale::try_from(normalized.as_str()) {
        return locale;
    }

    // The CMS front end often stores a bare language code; widen the common
    // ones to their primary region.
    let widened = match normalized.as_str() {
        "en" => Some(Locale::en_US),
        "fr" => Some(Locale::fr_FR),
        "de" => Some(Locale::de_DE),
        "es" => Some(Locale::es_ES),
        "it" => Some(Locale::it_IT),
        "pt" => Some(Locale::pt_PT),
        "nl" => Some(Locale::nl_NL),
        "ja" => Some(Locale::ja_JP),
        "zh" => Some(Locale::zh_CN),
        "ru" => Some(Locale::ru_RU),
        _ => None,
    };

    widened.unwrap_or_else(|| {
        tracing::warn!(tag = %normalized, "unknown locale tag, using POSIX date format");
        Locale::POSIX
    })
}
