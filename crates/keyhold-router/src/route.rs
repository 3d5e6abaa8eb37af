use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{RouteBuildError, RouteParseError};
use crate::kind::{ParamKind, ParamValue};
use crate::path;

/// A named, typed rule for converting between a parameter set and a hash
/// path string.
///
/// A route is immutable once constructed: its name and parameter spec are
/// fixed, and [`Route::match_url`] / [`Route::build_url`] are pure
/// functions closed over them. Parameters keep their declaration order,
/// which is the order `build_url` emits them in.
///
/// # Examples
///
/// ```
/// use keyhold_router::{ParamKind, Params, Route};
///
/// let account = Route::new("account").param("id", ParamKind::Str);
///
/// let url = account.build_url(&Params::new().with("id", "abc-123")).unwrap();
/// assert_eq!(url, "#/account/id/abc-123");
///
/// let params = account.match_url(&url).unwrap().unwrap();
/// assert_eq!(params.get_str("id"), Some("abc-123"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    name: String,
    params: Vec<(String, ParamKind)>,
}

/// Decoded parameters of a matched route, keyed by declared name.
///
/// Also the input shape for [`Route::build_url`]; build one with the
/// [`Params::with`] chain. Absent nullable parameters are carried as
/// [`ParamValue::Null`], so a successful match always holds every declared
/// name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    values: HashMap<String, ParamValue>,
}

impl Route {
    /// Creates a route with the given name and no parameters.
    ///
    /// The name must be unique within any router the route is registered
    /// to; uniqueness is the caller's responsibility.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty. An unnamed route is a construction-time
    /// contract violation, same as an unknown parameter kind would be.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "route name must not be empty");
        Route {
            name,
            params: Vec::new(),
        }
    }

    /// Declares a parameter, keeping declaration order.
    pub fn param(mut self, name: impl Into<String>, kind: ParamKind) -> Self {
        self.params.push((name.into(), kind));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameters in declaration order
    pub fn params(&self) -> impl Iterator<Item = (&str, ParamKind)> {
        self.params.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Extracts typed parameters from a hash path, if it matches this route.
    ///
    /// Returns `Ok(None)` when the path does not belong to this route: the
    /// `#/` prefix is missing, the first segment is not this route's name
    /// (ASCII case-insensitive), or a required parameter is absent. A
    /// router treats that as "try the next route".
    ///
    /// Returns `Err` when the path *does* name this route but a present
    /// parameter value fails percent-decoding or kind-specific parsing.
    /// Routers propagate this instead of falling through.
    ///
    /// Absent nullable parameters decode to [`ParamValue::Null`].
    pub fn match_url(&self, path: &str) -> Result<Option<Params>, RouteParseError> {
        let segments = match path::hash_segments(path) {
            Some(segments) => segments,
            None => return Ok(None),
        };
        match segments.first() {
            Some(first) if first.eq_ignore_ascii_case(&self.name) => {}
            _ => return Ok(None),
        }

        let mut params = Params::new();
        for (key, kind) in &self.params {
            let raw = match path::find_param(&segments[1..], key) {
                Some(raw) => raw,
                None if kind.is_nullable() => {
                    params.insert(key.clone(), ParamValue::Null);
                    continue;
                }
                None => return Ok(None),
            };
            let decoded = urlencoding::decode(raw).map_err(|_| RouteParseError::Decode {
                route: self.name.clone(),
                param: key.clone(),
                value: raw.to_string(),
            })?;
            let value = kind
                .parse(&decoded)
                .ok_or_else(|| RouteParseError::Deserialize {
                    route: self.name.clone(),
                    param: key.clone(),
                    kind: *kind,
                    value: raw.to_string(),
                })?;
            params.insert(key.clone(), value);
        }
        Ok(Some(params))
    }

    /// Builds the hash path for this route from a parameter set.
    ///
    /// Emits `#/<name>` followed by `/<key>/<value>` for every declared
    /// parameter with a non-null value, in declaration order, with keys
    /// lowercased and values percent-encoded. Null-valued nullable
    /// parameters are omitted entirely; that is how absence is represented
    /// on the wire.
    ///
    /// The parameter set must supply every declared name with a well-typed
    /// value (null only for nullable kinds); anything else is reported as
    /// a [`RouteBuildError`].
    pub fn build_url(&self, params: &Params) -> Result<String, RouteBuildError> {
        let mut url = format!("#/{}", self.name);
        for (key, kind) in &self.params {
            let value = params.get(key).ok_or_else(|| RouteBuildError::MissingParam {
                route: self.name.clone(),
                param: key.clone(),
            })?;
            if !kind.accepts(value) {
                return Err(if value.is_null() {
                    RouteBuildError::NullForRequired {
                        route: self.name.clone(),
                        param: key.clone(),
                        kind: *kind,
                    }
                } else {
                    RouteBuildError::KindMismatch {
                        route: self.name.clone(),
                        param: key.clone(),
                        kind: *kind,
                    }
                });
            }
            if let Some(raw) = value.serialize() {
                url.push('/');
                url.push_str(&key.to_lowercase());
                url.push('/');
                url.push_str(&urlencoding::encode(&raw));
            }
        }
        Ok(url)
    }
}

impl Params {
    pub fn new() -> Self {
        Params::default()
    }

    /// Adds a parameter, builder style.
    ///
    /// Anything convertible to [`ParamValue`] works, including `Option`
    /// (where `None` becomes [`ParamValue::Null`]).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    pub fn get_num(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ParamValue::as_num)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ParamValue::as_bool)
    }

    pub fn get_date(&self, name: &str) -> Option<chrono::NaiveDate> {
        self.get(name).and_then(ParamValue::as_date)
    }

    /// Whether the named parameter decoded to null (absent nullable)
    pub fn is_null(&self, name: &str) -> bool {
        matches!(self.get(name), Some(ParamValue::Null))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
