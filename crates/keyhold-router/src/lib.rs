//! # Keyhold Router
//!
//! A two-way typed hash-routing library: declare a route once and get both
//! directions for free — matching a `#/...` path into typed parameters and
//! building the path back from them.
//!
//! - **Declarative routes**: a name plus an ordered map of parameter names
//!   to [`ParamKind`]s (string, number, boolean, date, each with a
//!   nullable flavor)
//! - **Bidirectional**: [`Route::match_url`] and [`Route::build_url`] are
//!   pure inverses up to key casing; absent nullable parameters decode to
//!   null and null parameters are omitted when building
//! - **Ordered fallback**: [`Router`] tries routes strictly in
//!   registration order and the first match wins
//! - **Loud on malformed values**: a present parameter that fails its
//!   kind's parsing is an error, not a silent fall-through to the next
//!   route
//!
//! ## Wire format
//!
//! `#/<routeName>(/<paramName>/<percentEncodedValue>)*` — route name and
//! parameter names compare case-insensitively, parameter lookup is by name
//! rather than position, and every value is percent-encoded individually.
//!
//! ## Example
//!
//! ```
//! use keyhold_router::{ParamKind, Params, Route, Router};
//!
//! let account = Route::new("account").param("id", ParamKind::Str);
//! let search = Route::new("search").param("searchTerm", ParamKind::Str);
//!
//! let router = Router::new(account, |p: &Params| {
//!     format!("account {}", p.get_str("id").unwrap_or_default())
//! })
//! .register(search, |p: &Params| {
//!     format!("search {}", p.get_str("searchTerm").unwrap_or_default())
//! });
//!
//! let page = router.match_path("#/search/searchterm/a%20b").unwrap();
//! assert_eq!(page.as_deref(), Some("search a b"));
//! ```

mod error;
mod kind;
mod path;
mod route;
mod router;

pub use error::{RouteBuildError, RouteParseError};
pub use kind::{ParamKind, ParamValue};
pub use route::{Params, Route};
pub use router::Router;
