use std::fmt;

use tracing::{debug, trace};

use crate::error::RouteParseError;
use crate::route::{Params, Route};

/// An ordered collection of routes with handlers, resolving a hash path
/// to the first matching handler's result.
///
/// The router is an append-only list built once at startup: [`Router::new`]
/// seeds it, [`Router::register`] adds routes behind the existing ones.
/// Matching walks the list in registration order and stops at the first
/// route that matches, so the first-registered of any two overlapping
/// routes wins. Duplicate route names are not guarded against; the
/// first-registered one shadows the rest, consistent with match order.
///
/// `T` is whatever the handlers produce (a page, a string, anything); the
/// router never inspects it.
///
/// # Examples
///
/// ```
/// use keyhold_router::{ParamKind, Params, Route, Router};
///
/// let router = Router::new(Route::new("index"), |_: &Params| "home".to_string())
///     .register(
///         Route::new("account").param("id", ParamKind::Str),
///         |p: &Params| format!("account {}", p.get_str("id").unwrap_or_default()),
///     );
///
/// assert_eq!(router.match_path("#/index").unwrap().as_deref(), Some("home"));
/// assert_eq!(
///     router.match_path("#/account/id/abc-123").unwrap().as_deref(),
///     Some("account abc-123"),
/// );
/// assert_eq!(router.match_path("#/doesNotExist").unwrap(), None);
/// ```
pub struct Router<T> {
    entries: Vec<RouteEntry<T>>,
}

struct RouteEntry<T> {
    route: Route,
    handler: Box<dyn Fn(&Params) -> T>,
}

impl<T> Router<T> {
    /// Seeds a router with its first route/handler pair.
    pub fn new<H>(route: Route, handler: H) -> Self
    where
        H: Fn(&Params) -> T + 'static,
    {
        Router { entries: Vec::new() }.register(route, handler)
    }

    /// Appends a route/handler pair, tried only after all earlier ones.
    pub fn register<H>(mut self, route: Route, handler: H) -> Self
    where
        H: Fn(&Params) -> T + 'static,
    {
        self.entries.push(RouteEntry {
            route,
            handler: Box::new(handler),
        });
        self
    }

    /// Resolves a hash path to the first matching route's handler result.
    ///
    /// `Ok(None)` means no registered route matched; the caller maps that
    /// to its not-found outcome. A hard parse failure inside a route whose
    /// name did match (see [`Route::match_url`]) propagates as `Err`
    /// without consulting later routes.
    pub fn match_path(&self, path: &str) -> Result<Option<T>, RouteParseError> {
        for entry in &self.entries {
            trace!(route = %entry.route.name(), path, "trying route");
            if let Some(params) = entry.route.match_url(path)? {
                debug!(route = %entry.route.name(), path, "route matched");
                return Ok(Some((entry.handler)(&params)));
            }
        }
        debug!(path, "no route matched");
        Ok(None)
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field(
                "routes",
                &self
                    .entries
                    .iter()
                    .map(|entry| entry.route.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
