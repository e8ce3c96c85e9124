//! Message catalog with per-request locale selection.
//!
//! Messages are addressed by a dotted key (e.g. `auth.invalid.credentials`)
//! and may contain positional placeholders `{0}`, `{1}`, ... .
//! A lookup falls back to English, then to the key itself.
//!
//! ```rust
//! use axum_helpers::i18n::{Catalog, Locale};
//!
//! let catalog = Catalog::new(Locale::En).with_messages(&[(
//!     "greeting",
//!     "Hello, {0}!",
//!     "Olá, {0}!",
//! )]);
//!
//! assert_eq!(catalog.message(Locale::PtBr, "greeting", &[&"Ana"]), "Olá, Ana!");
//! ```

mod locale;

pub use locale::{Locale, UnsupportedLocale};

use std::collections::HashMap;
use std::fmt::Display;

/// `(key, English, Brazilian Portuguese)`
pub type MessageEntry = (&'static str, &'static str, &'static str);

/// Keys of the messages shipped with every catalog.
pub mod keys {
    pub const AUTH_INVALID_CREDENTIALS: &str = "auth.invalid.credentials";
    pub const VALIDATION_FAILED: &str = "request.validation.failed";
    pub const TYPE_MISMATCH: &str = "request.type.mismatch";
    pub const ROUTE_NOT_FOUND: &str = "request.route.not.found";
    pub const INTERNAL_ERROR: &str = "server.internal.error";
}

const COMMON_MESSAGES: &[MessageEntry] = &[
    (
        keys::AUTH_INVALID_CREDENTIALS,
        "Invalid or missing credentials.",
        "Credenciais inválidas ou ausentes.",
    ),
    (
        keys::VALIDATION_FAILED,
        "Validation Failed",
        "Falha na validação",
    ),
    (
        keys::TYPE_MISMATCH,
        "Failed to convert '{0}' with value: '{1}'",
        "Falha ao converter '{0}' com o valor: '{1}'",
    ),
    (
        keys::ROUTE_NOT_FOUND,
        "The requested resource was not found",
        "O recurso solicitado não foi encontrado",
    ),
    (
        keys::INTERNAL_ERROR,
        "An internal server error occurred",
        "Ocorreu um erro interno no servidor",
    ),
];

#[derive(Debug, Clone, Copy)]
struct Translations {
    en: &'static str,
    pt_br: &'static str,
}

impl Translations {
    fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::PtBr if self.pt_br.is_empty() => self.en,
            Locale::PtBr => self.pt_br,
        }
    }
}

/// Immutable set of localized messages, built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_locale: Locale,
    messages: HashMap<&'static str, Translations>,
}

impl Catalog {
    /// Creates a catalog holding the common messages.
    pub fn new(default_locale: Locale) -> Self {
        Self {
            default_locale,
            messages: HashMap::new(),
        }
        .with_messages(COMMON_MESSAGES)
    }

    /// Adds (or replaces) entries.
    pub fn with_messages(mut self, entries: &[MessageEntry]) -> Self {
        for &(key, en, pt_br) in entries {
            self.messages.insert(key, Translations { en, pt_br });
        }
        self
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Raw template for `key`, without placeholder substitution.
    pub fn template(&self, locale: Locale, key: &str) -> Option<&'static str> {
        self.messages.get(key).map(|t| t.get(locale))
    }

    /// Renders `key` in `locale`, substituting `{n}` with `args[n]`.
    pub fn message(&self, locale: Locale, key: &str, args: &[&dyn Display]) -> String {
        match self.template(locale, key) {
            Some(template) => render(template, args),
            None => key.to_string(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

fn render(template: &str, args: &[&dyn Display]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |text, (i, arg)| {
            text.replace(&format!("{{{i}}}"), &arg.to_string())
        })
}
