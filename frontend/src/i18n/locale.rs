use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Pt];

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    /// Name of the language in that language, for the switcher.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Pt => "Português",
        }
    }

    /// Case-insensitive, tolerant of region tags (`pt-BR`, `en_US`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        SUPPORTED_LOCALES.iter().copied().find(|locale| locale.as_str() == lang)
    }

    /// The locale for a request, or the default when none resolves.
    pub fn resolve(requested: Option<&str>) -> Self {
        requested.and_then(Self::parse).unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_and_region_tags() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse(" PT "), Some(Locale::Pt));
        assert_eq!(Locale::parse("pt-BR"), Some(Locale::Pt));
        assert_eq!(Locale::parse("en_US"), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn unresolved_requests_fall_back_to_english() {
        assert_eq!(Locale::resolve(None), Locale::En);
        assert_eq!(Locale::resolve(Some("de")), Locale::En);
        assert_eq!(Locale::resolve(Some("pt")), Locale::Pt);
    }
}
