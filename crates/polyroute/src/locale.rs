// File: polyroute/src/locale.rs
// Purpose: locale identity used to pick the right translated route section

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A language/region identifier (IETF-like tag) with an optional domain hint.
///
/// The domain hint lets a host application map a locale to a dedicated
/// domain (e.g. `fr-CA` served from `example.fr`); this crate only carries
/// it, it never interprets it.
///
/// Two locales are equal when their ids match, ASCII case-insensitively.
/// `EN-us` and `en-US` name the same locale.
///
/// # Examples
///
/// ```rust
/// use polyroute::Locale;
///
/// let en = Locale::new("en-US");
/// assert_eq!(en, Locale::new("EN-us"));
/// assert!(en.domain_hint().is_none());
///
/// let fr = Locale::with_domain("fr-CA", "https://example.fr");
/// assert_eq!(fr.domain_hint(), Some("https://example.fr"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locale {
    id: String,
    domain_hint: Option<String>,
}

impl Locale {
    /// Create a locale from its identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            domain_hint: None,
        }
    }

    /// Create a locale bound to a domain hint
    pub fn with_domain(id: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            domain_hint: Some(domain.into()),
        }
    }

    /// The locale identifier, exactly as constructed
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Optional domain associated with this locale
    pub fn domain_hint(&self) -> Option<&str> {
        self.domain_hint.as_deref()
    }

    /// Case-insensitive id comparison, the single locale-equality rule
    /// used everywhere in this crate
    pub fn matches(&self, other: &Locale) -> bool {
        self.id.eq_ignore_ascii_case(&other.id)
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for Locale {}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Well-known English locale (`en-US`)
pub static EN: Lazy<Locale> = Lazy::new(|| Locale::new("en-US"));

/// Well-known French locale (`fr-CA`)
pub static FR: Lazy<Locale> = Lazy::new(|| Locale::new("fr-CA"));
