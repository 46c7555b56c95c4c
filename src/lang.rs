//!
//! Display language of the day labels.
//!
//! The picker knows arabic, english and german texts.
//! Any other language gets the [PLACEHOLDER].
//!
use crate::day::Day;

/// Text shown for an unknown language.
pub const PLACEHOLDER: &str = "??";

/// Supported languages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Ar,
    #[default]
    En,
    De,
}

/// Language code to language.
static LANGS: &[(&str, Lang)] = &[
    ("ar", Lang::Ar), //
    ("en", Lang::En),
    ("de", Lang::De),
];

impl Lang {
    /// All supported languages.
    pub fn all() -> &'static [Lang] {
        &[Lang::Ar, Lang::En, Lang::De]
    }

    /// Two letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::En => "en",
            Lang::De => "de",
        }
    }

    /// Language for a locale string.
    ///
    /// Accepts plain codes like `de` as well as full locales
    /// like `de-AT`, `de_DE.UTF-8` or `EN`.
    pub fn from_locale(locale: &str) -> Option<Lang> {
        let code = normalize_locale(locale);
        LANGS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, lang)| *lang)
    }
}

/// Reduces a locale to its lowercase language subtag.
pub fn normalize_locale(locale: &str) -> String {
    locale
        .trim()
        .split(|c: char| matches!(c, '-' | '_' | '.' | '@'))
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Text for one day in the given locale.
///
/// Gives the [PLACEHOLDER] if the language is not supported.
pub fn resolve_text<'a>(day: &'a Day, locale: &str, full_text: bool) -> &'a str {
    match Lang::from_locale(locale) {
        Some(lang) => day.name(lang, full_text),
        None => PLACEHOLDER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_locale("en"), "en");
        assert_eq!(normalize_locale(" DE "), "de");
        assert_eq!(normalize_locale("de_AT.UTF-8"), "de");
        assert_eq!(normalize_locale("ar-EG"), "ar");
        assert_eq!(normalize_locale("en@euro"), "en");
        assert_eq!(normalize_locale(""), "");
    }

    #[test]
    fn test_lang() {
        assert_eq!(Lang::from_locale("en-US"), Some(Lang::En));
        assert_eq!(Lang::from_locale("AR"), Some(Lang::Ar));
        assert_eq!(Lang::from_locale("de"), Some(Lang::De));
        assert_eq!(Lang::from_locale("fr"), None);
        assert_eq!(Lang::from_locale(""), None);
        for lang in Lang::all() {
            assert_eq!(Lang::from_locale(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn test_resolve() {
        let day = Day::new(2)
            .with_text(Lang::En, "Monday", "Mon")
            .with_text(Lang::De, "Montag", "Mo")
            .with_text(Lang::Ar, "الإثنين", "إثنين");

        assert_eq!(resolve_text(&day, "en", false), "Mon");
        assert_eq!(resolve_text(&day, "en", true), "Monday");
        assert_eq!(resolve_text(&day, "De-de", true), "Montag");
        assert_eq!(resolve_text(&day, "ar", false), "إثنين");
        assert_eq!(resolve_text(&day, "fr", true), PLACEHOLDER);
        assert_eq!(resolve_text(&day, "fr", false), "??");
    }
}
