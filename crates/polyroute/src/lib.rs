//! # Polyroute
//!
//! Fluent multi-locale route tables with visitor-based localized URL
//! generation.
//!
//! Polyroute sits on top of a host web framework's routing engine: the host
//! keeps doing the HTTP request matching, pattern parsing and constraint
//! evaluation, while this crate owns the tree of Area/Controller/Action
//! metadata - per-locale translated names, URL templates, default values,
//! constraints and named tokens - and the reverse lookup that turns a
//! (locale, controller, action) query back into a localized URL string.
//!
//! ## Features
//!
//! - **Fluent definition** - areas, controllers, actions and their
//!   translations declared in one chain
//! - **Mirror URLs** - the same logical action reachable through several URL
//!   shapes
//! - **Localized tokens** - named, per-locale translated placeholders
//! - **Default values** - optional segments collapse or resolve per query
//! - **Visitor traversal** - first match wins, early exit on large trees
//! - **Plain `{placeholder}` templates** - compatible with existing URL
//!   template strings
//!
//! ## Quick Start
//!
//! ```rust
//! use polyroute::{Locale, RouteBuilder, RouteLocalizedVisitor};
//!
//! let tree = RouteBuilder::new()
//!     .in_locale(Locale::new("en-US"))
//!     .in_locale(Locale::new("fr-CA"))
//!     .for_area("moderator", ["Moderation-en", "Moderation"])
//!     .with_controller("Symbol", ["Symbol-en", "Symbole"])
//!     .with_action("SymbolChangeList", ["Symbol-Change-List", "Liste-symbole-renommer"])
//!     .use_default_url()
//!     .into_tree();
//!
//! let visitor = RouteLocalizedVisitor::new(
//!     Locale::new("en-US"),
//!     Some("moderator"),
//!     "Symbol",
//!     "SymbolChangeList",
//!     None,
//!     None,
//! )?;
//!
//! let resolution = tree.resolve(visitor)?;
//! assert_eq!(
//!     resolution.final_url()?,
//!     "Moderation-en/Symbol-en/Symbol-Change-List"
//! );
//! # Ok::<(), polyroute::RouteError>(())
//! ```
//!
//! ## Resolution rules
//!
//! A query names a controller and an action (mandatory), optionally an area,
//! positional url-input names and token names. The traversal walks the area
//! list when an area was named, the loose controllers otherwise, and checks
//! every action whose name matches - mirror variants included:
//!
//! 1. every requested token must exist on the candidate with a translation
//!    for the query's locale;
//! 2. every requested url input must appear in the candidate's template;
//!    defaults fill in values, absent or empty defaults pass `{name}`
//!    through for the caller;
//! 3. on the first candidate that qualifies, the localized area, controller
//!    and action names are recorded, unrequested defaults collapse to
//!    nothing, and the traversal stops.
//!
//! [`RouteResolution::final_url`] then substitutes every `{key}` in the
//! template, in recording order, and trims trailing slashes.

pub mod builder;
pub mod error;
pub mod locale;
pub mod resolution;
pub mod section;
pub mod tree;
pub mod value;
pub mod visitor;

// Re-export the public surface at the crate root
pub use builder::{ActionBuilder, AreaBuilder, ControllerBuilder, RouteBuilder};
pub use error::RouteError;
pub use locale::{Locale, EN, FR};
pub use resolution::{RouteResolution, ACTION, AREA, CONTROLLER};
pub use section::{LocalizedSection, LocalizedSectionList};
pub use tree::{
    accept_areas, accept_controllers, ActionNode, AreaNode, ControllerNode, RouteTree,
};
pub use value::{OrderedMap, RouteValueMap, TokenMap};
pub use visitor::{RouteLocalizedVisitor, RouteVisitor};
