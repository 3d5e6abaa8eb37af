use thiserror::Error;

use crate::kind::ParamKind;

/// Hard failure while matching a URL against a route.
///
/// Raised only when the route name already matched and a declared
/// parameter is present in the URL but its value cannot be decoded. A
/// missing required parameter is not an error: the route simply does not
/// match (`Ok(None)`) and the router moves on to the next one. Malformed
/// present values never fall through to later routes; they surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteParseError {
    #[error("route {route}: parameter {param} value {value:?} is not valid percent-encoding")]
    Decode {
        route: String,
        param: String,
        value: String,
    },

    #[error("route {route}: could not parse parameter {param} as {kind:?} from value {value:?}")]
    Deserialize {
        route: String,
        param: String,
        kind: ParamKind,
        value: String,
    },
}

/// Contract violation while building a URL from a parameter set.
///
/// `build_url` expects exactly the declared parameter names with
/// well-typed values; anything else is a programmer error surfaced here
/// rather than a malformed URL.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteBuildError {
    #[error("route {route}: parameter {param} missing from the parameter set")]
    MissingParam { route: String, param: String },

    #[error("route {route}: parameter {param} is required ({kind:?}) but a null value was supplied")]
    NullForRequired {
        route: String,
        param: String,
        kind: ParamKind,
    },

    #[error("route {route}: parameter {param} value does not match its declared kind {kind:?}")]
    KindMismatch {
        route: String,
        param: String,
        kind: ParamKind,
    },
}
