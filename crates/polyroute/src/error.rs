// File: polyroute/src/error.rs
// Purpose: error kinds surfaced by route queries and URL rendering

use thiserror::Error;

/// Errors produced while querying a route tree or rendering a final URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The query is missing a mandatory name. Controller and action are
    /// required for every lookup; area, positional values and tokens are
    /// optional.
    #[error("route query is missing a {field} name")]
    InvalidQuery { field: &'static str },

    /// No leaf of the tree satisfied the query. Surfaced by
    /// [`RouteResolution::final_url`](crate::RouteResolution::final_url),
    /// never by the traversal itself.
    #[error("route not found for the requested url pieces")]
    RouteNotFound,

    /// A matched area, controller or action has no translation for the
    /// requested locale. The builder guarantees one section per registered
    /// locale, so hitting this means the tree was assembled inconsistently.
    #[error("no translation registered for `{name}` in locale `{locale}`")]
    TranslationMissing { name: String, locale: String },
}
