// File: polyroute/src/section.rs
// Purpose: the basic multilingual text unit and its ordered list

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// A single translated string: one locale, one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedSection {
    pub locale: Locale,
    pub text: String,
}

impl LocalizedSection {
    pub fn new(locale: Locale, text: impl Into<String>) -> Self {
        Self {
            locale,
            text: text.into(),
        }
    }
}

/// Ordered list of translated strings for one route element.
///
/// Insertion order is preserved and no uniqueness is enforced by the type;
/// the route builder supplies exactly one section per registered locale.
///
/// # Examples
///
/// ```rust
/// use polyroute::{Locale, LocalizedSection, LocalizedSectionList};
///
/// let mut sections = LocalizedSectionList::new();
/// sections.push(LocalizedSection::new(Locale::new("en-US"), "Home"));
/// sections.push(LocalizedSection::new(Locale::new("fr-CA"), "Demarrer"));
///
/// assert_eq!(sections.for_locale(&Locale::new("EN-US")), Some("Home"));
/// assert_eq!(sections.for_locale(&Locale::new("de-DE")), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedSectionList(Vec<LocalizedSection>);

impl LocalizedSectionList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, section: LocalizedSection) {
        self.0.push(section);
    }

    /// The translated text for `locale`, if one was registered.
    ///
    /// When several sections carry the same locale the first one wins.
    pub fn for_locale(&self, locale: &Locale) -> Option<&str> {
        self.0
            .iter()
            .find(|section| section.locale.matches(locale))
            .map(|section| section.text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocalizedSection> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<LocalizedSection> for LocalizedSectionList {
    fn from_iter<I: IntoIterator<Item = LocalizedSection>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LocalizedSectionList {
    type Item = LocalizedSection;
    type IntoIter = std::vec::IntoIter<LocalizedSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocalizedSectionList {
        [
            LocalizedSection::new(Locale::new("en-US"), "Symbol-en"),
            LocalizedSection::new(Locale::new("fr-CA"), "Symbole"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_for_locale_finds_translation() {
        let sections = sample();
        assert_eq!(sections.for_locale(&Locale::new("fr-CA")), Some("Symbole"));
    }

    #[test]
    fn test_for_locale_is_case_insensitive() {
        let sections = sample();
        assert_eq!(sections.for_locale(&Locale::new("EN-us")), Some("Symbol-en"));
    }

    #[test]
    fn test_for_locale_missing_returns_none() {
        let sections = sample();
        assert_eq!(sections.for_locale(&Locale::new("es-ES")), None);
    }

    #[test]
    fn test_first_section_wins_on_duplicate_locale() {
        let mut sections = sample();
        sections.push(LocalizedSection::new(Locale::new("en-US"), "Shadowed"));
        assert_eq!(sections.for_locale(&Locale::new("en-US")), Some("Symbol-en"));
    }
}
