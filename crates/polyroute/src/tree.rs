// File: polyroute/src/tree.rs
// Purpose: the Area -> Controller -> Action route tree and its traversal
// entry points

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::resolution::RouteResolution;
use crate::section::LocalizedSectionList;
use crate::value::{RouteValueMap, TokenMap};
use crate::visitor::{RouteLocalizedVisitor, RouteVisitor};

/// A leaf route target.
///
/// Several action nodes may share the same `name` and `translations` while
/// carrying different `url_template`s - mirror variants of one logical
/// action, reachable through several URL shapes. The traversal examines every
/// candidate with a matching name, not just the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionNode {
    pub name: String,
    pub translations: LocalizedSectionList,
    /// URL shape with `{placeholder}` segments, e.g.
    /// `{area}/{controller}/{action}/{value1}`
    pub url_template: String,
    pub default_values: RouteValueMap,
    pub constraints: RouteValueMap,
    pub tokens: TokenMap,
}

impl ActionNode {
    pub fn new(name: impl Into<String>, translations: LocalizedSectionList) -> Self {
        Self {
            name: name.into(),
            translations,
            url_template: String::new(),
            default_values: RouteValueMap::new(),
            constraints: RouteValueMap::new(),
            tokens: TokenMap::new(),
        }
    }
}

/// A named grouping of actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerNode {
    pub name: String,
    pub translations: LocalizedSectionList,
    pub actions: Vec<ActionNode>,
    /// Handler namespaces for host-framework dispatch; carried, never
    /// interpreted here
    pub namespaces: Vec<String>,
}

impl ControllerNode {
    pub fn new(name: impl Into<String>, translations: LocalizedSectionList) -> Self {
        Self {
            name: name.into(),
            translations,
            actions: Vec::new(),
            namespaces: Vec::new(),
        }
    }

    /// Walk this controller. The visitor decides whether to descend into the
    /// actions; iteration stops as soon as the visitor is done.
    pub fn accept<V: RouteVisitor + ?Sized>(&self, visitor: &mut V) {
        if visitor.visit_controller(self) {
            for action in &self.actions {
                visitor.visit_action(action);
                if visitor.done() {
                    break;
                }
            }
        }
    }
}

/// A top-level grouping of controllers. Optional in the tree - loose
/// controllers live outside any area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaNode {
    pub name: String,
    pub translations: LocalizedSectionList,
    pub controllers: Vec<ControllerNode>,
}

impl AreaNode {
    pub fn new(name: impl Into<String>, translations: LocalizedSectionList) -> Self {
        Self {
            name: name.into(),
            translations,
            controllers: Vec::new(),
        }
    }

    pub fn accept<V: RouteVisitor + ?Sized>(&self, visitor: &mut V) {
        if visitor.visit_area(self) {
            for controller in &self.controllers {
                controller.accept(visitor);
                if visitor.done() {
                    break;
                }
            }
        }
    }
}

/// Walk a list of areas, stopping at the first complete match.
pub fn accept_areas<V: RouteVisitor + ?Sized>(areas: &[AreaNode], visitor: &mut V) {
    for area in areas {
        area.accept(visitor);
        if visitor.done() {
            break;
        }
    }
}

/// Walk a list of controllers, stopping at the first complete match.
pub fn accept_controllers<V: RouteVisitor + ?Sized>(controllers: &[ControllerNode], visitor: &mut V) {
    for controller in controllers {
        controller.accept(visitor);
        if visitor.done() {
            break;
        }
    }
}

/// A complete route table: areas plus the loose controllers that live
/// outside any area.
///
/// Built once by [`RouteBuilder`](crate::RouteBuilder) and read-only from
/// then on. Nodes own their strings and carry no interior mutability, so a
/// tree can be shared by reference across concurrent lookups; each query
/// brings its own visitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteTree {
    pub areas: Vec<AreaNode>,
    pub controllers: Vec<ControllerNode>,
}

impl RouteTree {
    pub fn new(areas: Vec<AreaNode>, controllers: Vec<ControllerNode>) -> Self {
        Self { areas, controllers }
    }

    /// Walk the whole tree with a custom visitor: areas first, then loose
    /// controllers, early-exiting as soon as the visitor is done.
    pub fn accept<V: RouteVisitor + ?Sized>(&self, visitor: &mut V) {
        accept_areas(&self.areas, visitor);
        if !visitor.done() {
            accept_controllers(&self.controllers, visitor);
        }
    }

    /// Run a localized lookup against this tree.
    ///
    /// Queries that name an area traverse the area list; queries without one
    /// traverse the loose controllers instead. Not-found is reported through
    /// the resolution's `found` flag, not as an error.
    ///
    /// # Errors
    ///
    /// [`RouteError::TranslationMissing`] when a matched node has no
    /// translation for the query's locale - a tree-integrity problem, not a
    /// lookup miss.
    pub fn resolve(
        &self,
        mut visitor: RouteLocalizedVisitor,
    ) -> Result<RouteResolution, RouteError> {
        if visitor.target_area().is_some() {
            accept_areas(&self.areas, &mut visitor);
        } else {
            accept_controllers(&self.controllers, &mut visitor);
        }
        visitor.into_result()
    }
}
