use std::fmt;
use std::str::FromStr;

use axum::http::{HeaderMap, header};

/// Locales the message catalog can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::PtBr => "pt-BR",
        }
    }

    /// Picks the best supported locale from an `Accept-Language` value.
    ///
    /// Entries are ranked by their `q` weight (default 1.0); ties keep header
    /// order. Entries with `q=0` and the `*` wildcard are skipped.
    pub fn from_accept_language(value: &str) -> Option<Self> {
        let mut ranges: Vec<(&str, f32)> = value
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let tag = parts.next()?.trim();
                let weight = parts
                    .filter_map(|p| p.trim().strip_prefix("q="))
                    .find_map(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                (!tag.is_empty() && tag != "*" && weight > 0.0).then_some((tag, weight))
            })
            .collect();

        ranges.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranges.into_iter().find_map(|(tag, _)| tag.parse().ok())
    }

    /// Locale requested by the client, if any supported one was asked for.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .and_then(Self::from_accept_language)
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Ok(Self::En),
            "pt" => Ok(Self::PtBr),
            _ => Err(UnsupportedLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_parse_tags() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("pt_br".parse::<Locale>().unwrap(), Locale::PtBr);
        assert!("de-DE".parse::<Locale>().is_err());
    }

    #[test]
    fn test_accept_language_respects_weights() {
        assert_eq!(
            Locale::from_accept_language("en;q=0.5, pt-BR;q=0.9"),
            Some(Locale::PtBr)
        );
        assert_eq!(
            Locale::from_accept_language("pt-BR,pt;q=0.9,en;q=0.8"),
            Some(Locale::PtBr)
        );
    }

    #[test]
    fn test_accept_language_skips_unsupported() {
        assert_eq!(
            Locale::from_accept_language("fr-FR, de;q=0.9, en;q=0.1"),
            Some(Locale::En)
        );
        assert_eq!(Locale::from_accept_language("fr, *"), None);
        assert_eq!(Locale::from_accept_language("pt;q=0"), None);
    }

    #[test]
    fn test_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(Locale::from_headers(&headers), None);

        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("pt-BR"));
        assert_eq!(Locale::from_headers(&headers), Some(Locale::PtBr));
    }
}
