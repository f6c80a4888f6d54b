// File: polyroute/src/visitor.rs
// Purpose: visitor protocol over the route tree and the localized lookup
// that walks it

use tracing::{debug, trace};

use crate::error::RouteError;
use crate::locale::Locale;
use crate::resolution::{RouteResolution, ACTION, AREA, CONTROLLER};
use crate::tree::{ActionNode, AreaNode, ControllerNode};

/// A traversal over the configuration tree of routes, one method per node
/// kind.
///
/// Each visit returns whether the traversal should descend past the node:
/// `visit_area` / `visit_controller` gate the walk into their children, and
/// `visit_action` reports a terminal match. Container traversals
/// ([`RouteTree::accept`](crate::RouteTree::accept) and the node `accept`
/// methods) stop iterating as soon as [`done`](RouteVisitor::done) flips -
/// the tree may be large, the first match wins and there is no ranking
/// among matches.
pub trait RouteVisitor {
    /// True once the traversal can stop: a leaf fully matched, or the
    /// visitor hit a fatal configuration error.
    fn done(&self) -> bool;

    /// Visit an area. Returns true to descend into its controllers.
    fn visit_area(&mut self, area: &AreaNode) -> bool;

    /// Visit a controller. Returns true to descend into its actions.
    fn visit_controller(&mut self, controller: &ControllerNode) -> bool;

    /// Visit an action leaf. Returns true when the route is found.
    fn visit_action(&mut self, action: &ActionNode) -> bool;
}

/// Finds a localized route in a tree from generic route information.
///
/// One visitor serves one query: it carries the target names and accumulates
/// the resolution while walking. Build a fresh visitor per lookup and hand it
/// to [`RouteTree::resolve`](crate::RouteTree::resolve) (or drive the node
/// `accept` methods directly and call [`into_result`](Self::into_result)).
///
/// The controller and action names are mandatory; area, positional url
/// inputs and tokens are optional. Name comparisons are exact; only locale
/// ids compare case-insensitively.
///
/// # Examples
///
/// ```rust
/// use polyroute::{Locale, RouteBuilder, RouteLocalizedVisitor};
///
/// let tree = RouteBuilder::new()
///     .in_locale(Locale::new("en-US"))
///     .in_locale(Locale::new("fr-CA"))
///     .for_area("moderator", ["Moderation-en", "Moderation"])
///     .with_controller("Symbol", ["Symbol-en", "Symbole"])
///     .with_action("SymbolChangeList", ["Symbol-Change-List", "Liste-symbole-renommer"])
///     .use_default_url()
///     .into_tree();
///
/// let visitor = RouteLocalizedVisitor::new(
///     Locale::new("fr-CA"), Some("moderator"), "Symbol", "SymbolChangeList", None, None,
/// ).unwrap();
///
/// let url = tree.resolve(visitor).unwrap().final_url().unwrap();
/// assert_eq!(url, "Moderation/Symbole/Liste-symbole-renommer");
/// ```
#[derive(Debug)]
pub struct RouteLocalizedVisitor {
    locale: Locale,
    area: Option<String>,
    controller: String,
    action: String,
    url_inputs: Option<Vec<String>>,
    tokens: Option<Vec<String>>,
    /// Translation of the last accepted controller, recorded into the
    /// resolution only once a leaf matches so the area/controller/action
    /// parts land as a unit
    controller_part: Option<String>,
    result: RouteResolution,
    error: Option<RouteError>,
}

impl RouteLocalizedVisitor {
    /// Create a visitor for one lookup.
    ///
    /// * `locale` - locale used for the route-to-URL conversion
    /// * `area` - area requested, if any
    /// * `controller` / `action` - mandatory target names
    /// * `url_inputs` - names the caller expects to supply as path segments
    /// * `tokens` - named localized tokens the route must carry
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidQuery`] when the controller or action name is
    /// empty - a caller programming error, reported before any traversal.
    pub fn new(
        locale: Locale,
        area: Option<&str>,
        controller: &str,
        action: &str,
        url_inputs: Option<&[&str]>,
        tokens: Option<&[&str]>,
    ) -> Result<Self, RouteError> {
        if controller.is_empty() {
            return Err(RouteError::InvalidQuery { field: "controller" });
        }
        if action.is_empty() {
            return Err(RouteError::InvalidQuery { field: "action" });
        }
        Ok(Self {
            locale,
            area: area.map(str::to_string),
            controller: controller.to_string(),
            action: action.to_string(),
            url_inputs: url_inputs.map(|names| names.iter().map(|s| s.to_string()).collect()),
            tokens: tokens.map(|names| names.iter().map(|s| s.to_string()).collect()),
            controller_part: None,
            result: RouteResolution::new(),
            error: None,
        })
    }

    /// The locale this lookup resolves translations against
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The area name this lookup targets, if any. Queries without one are
    /// answered from the loose-controller list.
    pub fn target_area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    /// True once every condition of the query was met by some leaf
    pub fn has_found_route(&self) -> bool {
        self.result.found()
    }

    /// Borrow the accumulated resolution
    pub fn result(&self) -> &RouteResolution {
        &self.result
    }

    /// Finish the lookup, surfacing any tree-integrity error met on a
    /// matched node.
    pub fn into_result(self) -> Result<RouteResolution, RouteError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.result),
        }
    }

    fn missing_translation(&mut self, name: &str) {
        self.error = Some(RouteError::TranslationMissing {
            name: name.to_string(),
            locale: self.locale.id().to_string(),
        });
    }

    /// Stage the localized value of every requested token. Any token absent
    /// from the candidate, or without a translation for this locale, rejects
    /// the candidate.
    fn extract_tokens(&self, action: &ActionNode, staged: &mut Vec<(String, String)>) -> bool {
        let Some(tokens) = &self.tokens else {
            return true;
        };
        for token in tokens {
            let translated = action
                .tokens
                .get(token)
                .and_then(|sections| sections.for_locale(&self.locale));
            match translated {
                Some(text) => staged.push((token.clone(), text.to_string())),
                None => return false,
            }
        }
        true
    }

    /// Stage every requested url input. Each must appear inside the
    /// candidate's template (case-insensitive substring). A non-empty default
    /// value is staged as-is; an empty or missing default stages the
    /// `{name}` placeholder so the caller can substitute its own value later.
    fn extract_url_inputs(&self, action: &ActionNode, staged: &mut Vec<(String, String)>) -> bool {
        let Some(inputs) = &self.url_inputs else {
            return true;
        };
        let template = action.url_template.to_ascii_lowercase();
        for input in inputs {
            if !template.contains(&input.to_ascii_lowercase()) {
                return false;
            }
            match action.default_values.get(input) {
                Some(value) if !value.is_empty() => staged.push((input.clone(), value.clone())),
                _ => staged.push((input.clone(), format!("{{{input}}}"))),
            }
        }
        true
    }

    /// Overlay defaults the caller did not request with an empty string, so
    /// the final URL renders their `{placeholder}` to nothing.
    fn blank_unrequested_defaults(&self, action: &ActionNode, staged: &mut Vec<(String, String)>) {
        for key in action.default_values.keys() {
            let requested = self
                .url_inputs
                .as_ref()
                .is_some_and(|inputs| inputs.iter().any(|input| input == key));
            if requested {
                continue;
            }
            match staged.iter_mut().find(|(name, _)| name == key) {
                Some((_, value)) => value.clear(),
                None => staged.push((key.to_string(), String::new())),
            }
        }
    }
}

impl RouteVisitor for RouteLocalizedVisitor {
    fn done(&self) -> bool {
        self.result.found() || self.error.is_some()
    }

    fn visit_area(&mut self, area: &AreaNode) -> bool {
        let Some(target) = self.area.as_deref() else {
            return false;
        };
        if area.name != target {
            return false;
        }
        match area.translations.for_locale(&self.locale) {
            Some(text) => {
                self.result.url_parts.insert(AREA, text);
                true
            }
            None => {
                self.missing_translation(&area.name);
                false
            }
        }
    }

    fn visit_controller(&mut self, controller: &ControllerNode) -> bool {
        if controller.name != self.controller {
            return false;
        }
        match controller.translations.for_locale(&self.locale) {
            Some(text) => {
                self.controller_part = Some(text.to_string());
                true
            }
            None => {
                self.missing_translation(&controller.name);
                false
            }
        }
    }

    fn visit_action(&mut self, action: &ActionNode) -> bool {
        if action.name != self.action {
            return false;
        }

        // Candidate checks stage into a scratch list first; the resolution
        // is only touched once the whole leaf qualifies.
        let mut staged: Vec<(String, String)> = Vec::new();
        if !self.extract_tokens(action, &mut staged) {
            trace!("action `{}` rejected: token requirements not met", action.name);
            return false;
        }
        if !self.extract_url_inputs(action, &mut staged) {
            trace!(
                "action `{}` rejected: requested value missing from template `{}`",
                action.name,
                action.url_template
            );
            return false;
        }

        let action_part = match action.translations.for_locale(&self.locale) {
            Some(text) => text.to_string(),
            None => {
                self.missing_translation(&action.name);
                return false;
            }
        };

        self.blank_unrequested_defaults(action, &mut staged);

        if let Some(controller_part) = self.controller_part.clone() {
            self.result.url_parts.insert(CONTROLLER, controller_part);
        }
        self.result.url_parts.insert(ACTION, action_part);
        for (key, value) in staged {
            self.result.url_parts.insert(key, value);
        }
        self.result.url_template = action.url_template.clone();
        self.result.found = true;
        debug!(
            "route found: `{}` via template `{}`",
            action.name, action.url_template
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EN, FR};
    use crate::section::{LocalizedSection, LocalizedSectionList};
    use pretty_assertions::assert_eq;

    fn sections(en: &str, fr: &str) -> LocalizedSectionList {
        [
            LocalizedSection::new(EN.clone(), en),
            LocalizedSection::new(FR.clone(), fr),
        ]
        .into_iter()
        .collect()
    }

    fn controller_with_mirrors() -> ControllerNode {
        let mut plain = ActionNode::new("List", sections("List-en", "Liste"));
        plain.url_template = "{controller}/{action}".to_string();

        let mut with_value = ActionNode::new("List", sections("List-en", "Liste"));
        with_value.url_template = "{controller}/{action}/{page}".to_string();

        let mut controller = ControllerNode::new("Catalog", sections("Catalog-en", "Catalogue"));
        controller.actions = vec![plain, with_value];
        controller
    }

    #[test]
    fn test_mandatory_names_fail_fast() {
        let err = RouteLocalizedVisitor::new(EN.clone(), None, "", "Index", None, None).unwrap_err();
        assert_eq!(err, RouteError::InvalidQuery { field: "controller" });

        let err = RouteLocalizedVisitor::new(EN.clone(), None, "Home", "", None, None).unwrap_err();
        assert_eq!(err, RouteError::InvalidQuery { field: "action" });
    }

    #[test]
    fn test_controller_part_recorded_only_at_leaf_match() {
        let controller = controller_with_mirrors();
        let mut visitor =
            RouteLocalizedVisitor::new(EN.clone(), None, "Catalog", "Missing", None, None).unwrap();

        controller.accept(&mut visitor);

        assert!(!visitor.has_found_route());
        assert!(visitor.result().url_parts().is_empty());
    }

    #[test]
    fn test_first_qualifying_mirror_wins() {
        let controller = controller_with_mirrors();
        let mut visitor =
            RouteLocalizedVisitor::new(EN.clone(), None, "Catalog", "List", None, None).unwrap();

        controller.accept(&mut visitor);

        assert!(visitor.has_found_route());
        assert_eq!(visitor.result().url_template(), "{controller}/{action}");
    }

    #[test]
    fn test_rejected_mirror_falls_through_to_sibling() {
        let controller = controller_with_mirrors();
        let mut visitor =
            RouteLocalizedVisitor::new(EN.clone(), None, "Catalog", "List", Some(&["page"]), None)
                .unwrap();

        controller.accept(&mut visitor);

        assert!(visitor.has_found_route());
        assert_eq!(visitor.result().url_template(), "{controller}/{action}/{page}");
        let resolution = visitor.into_result().unwrap();
        assert_eq!(resolution.final_url().unwrap(), "Catalog-en/List-en/{page}");
    }

    #[test]
    fn test_url_input_substring_check_ignores_case() {
        let mut action = ActionNode::new("Show", sections("Show-en", "Afficher"));
        action.url_template = "{controller}/{action}/{PageId}".to_string();
        let mut controller = ControllerNode::new("Doc", sections("Doc-en", "Doc-fr"));
        controller.actions = vec![action];

        let mut visitor =
            RouteLocalizedVisitor::new(EN.clone(), None, "Doc", "Show", Some(&["pageid"]), None)
                .unwrap();
        controller.accept(&mut visitor);

        assert!(visitor.has_found_route());
    }

    #[test]
    fn test_missing_controller_translation_is_loud() {
        let mut controller = ControllerNode::new(
            "Catalog",
            [LocalizedSection::new(EN.clone(), "Catalog-en")].into_iter().collect(),
        );
        let mut action = ActionNode::new("List", sections("List-en", "Liste"));
        action.url_template = "{controller}/{action}".to_string();
        controller.actions = vec![action];

        let mut visitor =
            RouteLocalizedVisitor::new(FR.clone(), None, "Catalog", "List", None, None).unwrap();
        controller.accept(&mut visitor);

        assert!(visitor.done());
        let err = visitor.into_result().unwrap_err();
        assert_eq!(
            err,
            RouteError::TranslationMissing {
                name: "Catalog".to_string(),
                locale: "fr-CA".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_token_translation_rejects_candidate_silently() {
        let mut action = ActionNode::new("Show", sections("Show-en", "Afficher"));
        action.url_template = "{controller}/{action}/{badge}".to_string();
        // Token registered for EN only; an FR query must reject the candidate
        // instead of erroring.
        action.tokens.insert(
            "badge",
            [LocalizedSection::new(EN.clone(), "Badge")]
                .into_iter()
                .collect::<LocalizedSectionList>(),
        );
        let mut controller = ControllerNode::new("Doc", sections("Doc-en", "Doc-fr"));
        controller.actions = vec![action];

        let mut visitor =
            RouteLocalizedVisitor::new(FR.clone(), None, "Doc", "Show", None, Some(&["badge"]))
                .unwrap();
        controller.accept(&mut visitor);

        assert!(!visitor.has_found_route());
        assert!(visitor.into_result().is_ok());
    }

    #[test]
    fn test_unrequested_default_blanked_even_when_token_staged_it() {
        // A token and a default value sharing a name: the default overlay
        // blanks the staged token because the caller never requested the
        // value as a url input.
        let mut action = ActionNode::new("Show", sections("Show-en", "Afficher"));
        action.url_template = "{controller}/{action}/{extra}".to_string();
        action.tokens.insert(
            "extra",
            [LocalizedSection::new(EN.clone(), "Extra")]
                .into_iter()
                .collect::<LocalizedSectionList>(),
        );
        action.default_values.insert("extra", "");
        let mut controller = ControllerNode::new("Doc", sections("Doc-en", "Doc-fr"));
        controller.actions = vec![action];

        let mut visitor =
            RouteLocalizedVisitor::new(EN.clone(), None, "Doc", "Show", None, Some(&["extra"]))
                .unwrap();
        controller.accept(&mut visitor);

        assert!(visitor.has_found_route());
        let resolution = visitor.into_result().unwrap();
        assert_eq!(resolution.url_parts().get("extra"), Some(&String::new()));
        assert_eq!(resolution.final_url().unwrap(), "Doc-en/Show-en");
    }
}
