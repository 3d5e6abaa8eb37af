//! # Keyhold Routes
//!
//! The route table of the Keyhold frontend: one typed [`Route`] per page,
//! a ready-made [`Router`] resolving hash paths to [`Page`] values, and
//! link helpers for building the hash paths the pages navigate with.
//!
//! This crate is pure routing data. It performs no rendering and no data
//! fetching; the host feeds it the current location hash and maps the
//! resolved [`Page`] (or a no-match) to whatever it draws.

use keyhold_router::{ParamKind, Params, Route, RouteBuildError, Router};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Folder id of the root folder, the landing place of the index route
pub const ROOT_FOLDER_ID: &str = "root";

/// Front page, showing the root folder
pub static INDEX_ROUTE: Lazy<Route> = Lazy::new(|| Route::new("index"));

/// A folder's listing
pub static FOLDER_ROUTE: Lazy<Route> =
    Lazy::new(|| Route::new("folder").param("folderId", ParamKind::Str));

/// Search results
pub static SEARCH_ROUTE: Lazy<Route> =
    Lazy::new(|| Route::new("search").param("searchTerm", ParamKind::Str));

/// A single credential (account) with its secrets
pub static CREDVIEW_ROUTE: Lazy<Route> =
    Lazy::new(|| Route::new("credview").param("id", ParamKind::Str));

/// SSH keys overview
pub static SSHKEYS_ROUTE: Lazy<Route> = Lazy::new(|| Route::new("sshkeys"));

/// Settings page
pub static SETTINGS_ROUTE: Lazy<Route> = Lazy::new(|| Route::new("settings"));

/// Unseal page, shown while the database is still sealed
pub static UNSEAL_ROUTE: Lazy<Route> = Lazy::new(|| Route::new("unseal"));

/// Audit log listing
pub static AUDITLOG_ROUTE: Lazy<Route> = Lazy::new(|| Route::new("auditlog"));

/// OTP token import for an account
pub static IMPORTOTPTOKEN_ROUTE: Lazy<Route> =
    Lazy::new(|| Route::new("importotptoken").param("account", ParamKind::Str));

/// A resolved page with its typed parameters.
///
/// The router's result type: says which page to show and with what, and
/// nothing about how to show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Home { folder_id: String },
    Search { search_term: String },
    Account { id: String },
    SshKeys,
    Settings,
    Unseal,
    AuditLog,
    ImportOtpToken { account: String },
}

/// Builds the application router, index route first.
///
/// The index route resolves to the root folder's [`Page::Home`], so `#/index`
/// and `#/folder/folderid/root` land on the same page.
pub fn router() -> Router<Page> {
    Router::new(INDEX_ROUTE.clone(), |_: &Params| Page::Home {
        folder_id: ROOT_FOLDER_ID.to_string(),
    })
    .register(FOLDER_ROUTE.clone(), |p: &Params| Page::Home {
        folder_id: p.get_str("folderId").unwrap_or_default().to_string(),
    })
    .register(SEARCH_ROUTE.clone(), |p: &Params| Page::Search {
        search_term: p.get_str("searchTerm").unwrap_or_default().to_string(),
    })
    .register(CREDVIEW_ROUTE.clone(), |p: &Params| Page::Account {
        id: p.get_str("id").unwrap_or_default().to_string(),
    })
    .register(SSHKEYS_ROUTE.clone(), |_: &Params| Page::SshKeys)
    .register(SETTINGS_ROUTE.clone(), |_: &Params| Page::Settings)
    .register(UNSEAL_ROUTE.clone(), |_: &Params| Page::Unseal)
    .register(AUDITLOG_ROUTE.clone(), |_: &Params| Page::AuditLog)
    .register(IMPORTOTPTOKEN_ROUTE.clone(), |p: &Params| {
        Page::ImportOtpToken {
            account: p.get_str("account").unwrap_or_default().to_string(),
        }
    })
}

pub fn index_link() -> Result<String, RouteBuildError> {
    INDEX_ROUTE.build_url(&Params::new())
}

pub fn folder_link(folder_id: &str) -> Result<String, RouteBuildError> {
    FOLDER_ROUTE.build_url(&Params::new().with("folderId", folder_id))
}

pub fn search_link(search_term: &str) -> Result<String, RouteBuildError> {
    SEARCH_ROUTE.build_url(&Params::new().with("searchTerm", search_term))
}

pub fn credential_link(id: &str) -> Result<String, RouteBuildError> {
    CREDVIEW_ROUTE.build_url(&Params::new().with("id", id))
}

pub fn ssh_keys_link() -> Result<String, RouteBuildError> {
    SSHKEYS_ROUTE.build_url(&Params::new())
}

pub fn settings_link() -> Result<String, RouteBuildError> {
    SETTINGS_ROUTE.build_url(&Params::new())
}

pub fn unseal_link() -> Result<String, RouteBuildError> {
    UNSEAL_ROUTE.build_url(&Params::new())
}

pub fn audit_log_link() -> Result<String, RouteBuildError> {
    AUDITLOG_ROUTE.build_url(&Params::new())
}

pub fn import_otp_token_link(account_id: &str) -> Result<String, RouteBuildError> {
    IMPORTOTPTOKEN_ROUTE.build_url(&Params::new().with("account", account_id))
}
