// File: polyroute/src/builder.rs
// Purpose: fluent, stepwise construction of a localized route tree

use crate::locale::Locale;
use crate::section::{LocalizedSection, LocalizedSectionList};
use crate::tree::{ActionNode, AreaNode, ControllerNode, RouteTree};
use crate::value::TokenMap;

/// Entry point of the fluent route definition.
///
/// Register the supported locales first; every translated name supplied
/// afterwards must carry exactly one string per locale, in registration
/// order. Construction is append-only and ends at one of the `into_*`
/// terminals - the produced tree is frozen from then on.
///
/// # Examples
///
/// ```rust
/// use polyroute::{Locale, RouteBuilder};
///
/// let tree = RouteBuilder::new()
///     .in_locale(Locale::new("en-US"))
///     .in_locale(Locale::with_domain("fr-CA", "https://example.fr"))
///     .for_area("moderator", ["Moderation-en", "Moderation"])
///     .with_controller("Symbol", ["Symbol-en", "Symbole"])
///     .with_action("SymbolChangeList", ["Symbol-Change-List", "Liste-symbole-renommer"])
///     .use_default_url()
///     .and()
///     .with_action("GetSplits", ["ListSplit", "Liste-split"])
///     .with_url("{area}/{controller}/{action}/{symbol}")
///     .into_tree();
///
/// assert_eq!(tree.areas.len(), 1);
/// assert_eq!(tree.areas[0].controllers[0].actions.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RouteBuilder {
    locales: Vec<Locale>,
    areas: Vec<AreaNode>,
    controllers: Vec<ControllerNode>,
}

#[derive(Debug, Clone, Copy)]
enum ControllerScope {
    /// Loose controller at the tree root
    Loose,
    /// Controller nested under `areas[index]`
    Area(usize),
}

impl RouteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a supported locale. Order matters: translated strings are
    /// matched to locales by position.
    pub fn in_locale(mut self, locale: Locale) -> Self {
        self.locales.push(locale);
        self
    }

    /// Open an area scope.
    ///
    /// # Panics
    ///
    /// When the number of translated strings differs from the number of
    /// registered locales.
    pub fn for_area<I, S>(mut self, name: impl Into<String>, translations: I) -> AreaBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let sections = self.sections("area", &name, translations);
        self.areas.push(AreaNode::new(name, sections));
        let area = self.areas.len() - 1;
        AreaBuilder { root: self, area }
    }

    /// Open a loose controller scope, outside any area.
    ///
    /// # Panics
    ///
    /// When the number of translated strings differs from the number of
    /// registered locales.
    pub fn for_controller<I, S>(
        mut self,
        name: impl Into<String>,
        translations: I,
    ) -> ControllerBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let sections = self.sections("controller", &name, translations);
        self.controllers.push(ControllerNode::new(name, sections));
        let controller = self.controllers.len() - 1;
        ControllerBuilder {
            root: self,
            scope: ControllerScope::Loose,
            controller,
        }
    }

    fn sections<I, S>(&self, kind: &str, name: &str, translations: I) -> LocalizedSectionList
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = translations.into_iter().map(Into::into).collect();
        if texts.len() != self.locales.len() {
            panic!(
                "expected {} translated strings for {kind} `{name}`, got {}",
                self.locales.len(),
                texts.len()
            );
        }
        self.locales
            .iter()
            .cloned()
            .zip(texts)
            .map(|(locale, text)| LocalizedSection::new(locale, text))
            .collect()
    }
}

/// Builder scope for one area; add controllers to it.
#[derive(Debug)]
pub struct AreaBuilder {
    root: RouteBuilder,
    area: usize,
}

impl AreaBuilder {
    /// Add a controller under this area.
    ///
    /// # Panics
    ///
    /// When the number of translated strings differs from the number of
    /// registered locales.
    pub fn with_controller<I, S>(
        mut self,
        name: impl Into<String>,
        translations: I,
    ) -> ControllerBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let sections = self.root.sections("controller", &name, translations);
        let controllers = &mut self.root.areas[self.area].controllers;
        controllers.push(ControllerNode::new(name, sections));
        let controller = controllers.len() - 1;
        ControllerBuilder {
            scope: ControllerScope::Area(self.area),
            root: self.root,
            controller,
        }
    }
}

/// Builder scope for one controller; add actions or namespaces, or move on
/// to the next controller or area.
#[derive(Debug)]
pub struct ControllerBuilder {
    root: RouteBuilder,
    scope: ControllerScope,
    controller: usize,
}

impl ControllerBuilder {
    fn controller_mut(&mut self) -> &mut ControllerNode {
        match self.scope {
            ControllerScope::Loose => &mut self.root.controllers[self.controller],
            ControllerScope::Area(area) => &mut self.root.areas[area].controllers[self.controller],
        }
    }

    /// Associate a handler namespace with this controller
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.controller_mut().namespaces.push(namespace.into());
        self
    }

    /// Add an action under this controller.
    ///
    /// # Panics
    ///
    /// When the number of translated strings differs from the number of
    /// registered locales.
    pub fn with_action<I, S>(mut self, name: impl Into<String>, translations: I) -> ActionBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let sections = self.root.sections("action", &name, translations);
        let actions = &mut self.controller_mut().actions;
        actions.push(ActionNode::new(name, sections));
        let action = actions.len() - 1;
        ActionBuilder {
            controller: self,
            action,
        }
    }
}

/// Builder scope for one action: URL shape, defaults, constraints, tokens
/// and mirror variants.
#[derive(Debug)]
pub struct ActionBuilder {
    controller: ControllerBuilder,
    action: usize,
}

impl ActionBuilder {
    fn action(&mut self) -> &mut ActionNode {
        let action = self.action;
        &mut self.controller.controller_mut().actions[action]
    }

    /// Set the URL template for this action
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.action().url_template = url.into();
        self
    }

    /// Use the conventional `{area}/{controller}/{action}` template
    pub fn use_default_url(self) -> Self {
        self.with_url("{area}/{controller}/{action}")
    }

    /// Use an empty template; the action answers at the root
    pub fn use_empty_url(self) -> Self {
        self.with_url("")
    }

    /// Set one default value
    pub fn with_default_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.action().default_values.insert(key, value.into());
        self
    }

    /// Set several default values at once
    pub fn with_default_values<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in values {
            self.action().default_values.insert(key, value.into());
        }
        self
    }

    /// Set one constraint pattern for a route value
    pub fn with_constraint(mut self, key: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.action().constraints.insert(key, pattern.into());
        self
    }

    /// Set several constraint patterns at once
    pub fn with_constraints<I, K, V>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, pattern) in constraints {
            self.action().constraints.insert(key, pattern.into());
        }
        self
    }

    /// Register a localized token on this action.
    ///
    /// Re-registering an existing key is a no-op: the first registration
    /// wins and later translation lists are dropped.
    ///
    /// # Panics
    ///
    /// When the number of translated strings differs from the number of
    /// registered locales.
    pub fn with_token<I, S>(mut self, key: impl Into<String>, translations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        let sections = self.controller.root.sections("token", &key, translations);
        if !self.action().tokens.contains_key(&key) {
            self.action().tokens.insert(key, sections);
        }
        self
    }

    /// Register a sibling variant of this action with a different URL shape.
    ///
    /// The mirror shares the action's name, translations, default values and
    /// constraints; tokens are registered per variant. Subsequent
    /// configuration applies to the mirror.
    pub fn with_mirror_url(mut self, url: impl Into<String>) -> Self {
        let mirror = {
            let current = self.action();
            ActionNode {
                name: current.name.clone(),
                translations: current.translations.clone(),
                url_template: url.into(),
                default_values: current.default_values.clone(),
                constraints: current.constraints.clone(),
                tokens: TokenMap::new(),
            }
        };
        let actions = &mut self.controller.controller_mut().actions;
        actions.push(mirror);
        self.action = actions.len() - 1;
        self
    }

    /// Return to the controller scope to add another action
    pub fn and(self) -> ControllerBuilder {
        self.controller
    }

    /// Shorthand for `.and().with_action(..)`
    pub fn with_action<I, S>(self, name: impl Into<String>, translations: I) -> ActionBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.controller.with_action(name, translations)
    }

    /// Open the next loose controller scope
    pub fn for_controller<I, S>(self, name: impl Into<String>, translations: I) -> ControllerBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.controller.root.for_controller(name, translations)
    }

    /// Open the next area scope
    pub fn for_area<I, S>(self, name: impl Into<String>, translations: I) -> AreaBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.controller.root.for_area(name, translations)
    }

    /// Finish and produce the full route tree
    pub fn into_tree(self) -> RouteTree {
        RouteTree::new(self.controller.root.areas, self.controller.root.controllers)
    }

    /// Finish and keep only the area list
    pub fn into_areas(self) -> Vec<AreaNode> {
        self.controller.root.areas
    }

    /// Finish and keep only the loose controllers
    pub fn into_controllers(self) -> Vec<ControllerNode> {
        self.controller.root.controllers
    }
}
