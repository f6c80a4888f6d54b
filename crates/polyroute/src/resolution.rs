// File: polyroute/src/resolution.rs
// Purpose: the outcome of a route lookup and the final URL assembly

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::value::RouteValueMap;

/// Substitution key for the area segment. Lowercase, matching the
/// `{area}` placeholder convention of URL templates.
pub const AREA: &str = "area";

/// Substitution key for the controller segment.
pub const CONTROLLER: &str = "controller";

/// Substitution key for the action segment.
pub const ACTION: &str = "action";

/// Data returned from a visit into an Area-Controller-Action tree.
///
/// `url_parts` maps placeholder names to their resolved strings: `controller`
/// replaces `{controller}`, a token name replaces `{token_name}`, and so on.
/// The template is captured from the matched action and looks like
/// `{area}/{controller}/{action}/{value1}/{token1}`.
///
/// # Examples
///
/// ```rust
/// use polyroute::{Locale, RouteBuilder, RouteLocalizedVisitor};
///
/// let tree = RouteBuilder::new()
///     .in_locale(Locale::new("en-US"))
///     .for_controller("Home", ["Home"])
///     .with_action("Index", ["Start"])
///     .with_url("{controller}/{action}")
///     .into_tree();
///
/// let visitor = RouteLocalizedVisitor::new(
///     Locale::new("en-US"), None, "Home", "Index", None, None,
/// ).unwrap();
/// let resolution = tree.resolve(visitor).unwrap();
///
/// assert!(resolution.found());
/// assert_eq!(resolution.final_url().unwrap(), "Home/Start");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteResolution {
    pub(crate) found: bool,
    pub(crate) url_template: String,
    pub(crate) url_parts: RouteValueMap,
}

impl RouteResolution {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// True once a leaf fully matched the query
    pub fn found(&self) -> bool {
        self.found
    }

    /// The matched action's URL template; empty until a match is found
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Placeholder substitutions, in the order they were recorded
    pub fn url_parts(&self) -> &RouteValueMap {
        &self.url_parts
    }

    /// Assemble the localized URL for the caller.
    ///
    /// Every `{key}` occurrence in the template is replaced by its value,
    /// iterating the parts in insertion order - plain string replacement, no
    /// regex, so a first-inserted key consumes a literal placeholder before a
    /// later entry can see it. Trailing slashes are trimmed, which is what
    /// collapses unrequested optional segments.
    ///
    /// Rendering never mutates the resolution; calling this twice yields the
    /// same string.
    ///
    /// # Errors
    ///
    /// [`RouteError::RouteNotFound`] when no route matched the query.
    pub fn final_url(&self) -> Result<String, RouteError> {
        if !self.found {
            return Err(RouteError::RouteNotFound);
        }
        let mut url = self.url_template.clone();
        for (key, value) in self.url_parts.iter() {
            url = url.replace(&format!("{{{key}}}"), value);
        }
        Ok(url.trim_end_matches('/').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn found_resolution(template: &str, parts: &[(&str, &str)]) -> RouteResolution {
        let mut resolution = RouteResolution::new();
        resolution.found = true;
        resolution.url_template = template.to_string();
        for (key, value) in parts {
            resolution.url_parts.insert(*key, *value);
        }
        resolution
    }

    #[test]
    fn test_final_url_replaces_parts_and_trims() {
        let resolution = found_resolution(
            "{area}/{controller}/{action}",
            &[(AREA, "Moderation-en"), (CONTROLLER, "Symbol-en"), (ACTION, "List")],
        );
        assert_eq!(resolution.final_url().unwrap(), "Moderation-en/Symbol-en/List");
    }

    #[test]
    fn test_final_url_collapses_empty_parts() {
        let resolution = found_resolution(
            "{action}/{username}",
            &[(ACTION, "Profile-en"), ("username", "")],
        );
        assert_eq!(resolution.final_url().unwrap(), "Profile-en");
    }

    #[test]
    fn test_final_url_replacement_order_cascades() {
        // A pass-through value re-introduces a placeholder; the later entry
        // then replaces it. Insertion order decides the outcome.
        let resolution = found_resolution("{a}", &[("a", "{b}"), ("b", "x")]);
        assert_eq!(resolution.final_url().unwrap(), "x");

        let reversed = found_resolution("{a}", &[("b", "x"), ("a", "{b}")]);
        assert_eq!(reversed.final_url().unwrap(), "{b}");
    }

    #[test]
    fn test_final_url_not_found_errors() {
        let resolution = RouteResolution::new();
        assert_eq!(resolution.final_url(), Err(RouteError::RouteNotFound));
    }

    #[test]
    fn test_final_url_is_idempotent() {
        let resolution = found_resolution("{action}/x/", &[(ACTION, "a-en")]);
        let first = resolution.final_url().unwrap();
        let second = resolution.final_url().unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "a-en/x");
    }
}
