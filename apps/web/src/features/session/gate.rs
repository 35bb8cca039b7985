//! Pure pieces of the session gate: building the account query from the page
//! URL and turning the account response into a `Session`. Credentials read from
//! the URL are never logged and are stripped from the address bar before the
//! account fetch is issued.

use crate::{
    app_lib::AppError,
    features::session::{
        state::Session,
        types::{Account, ApiResponse, Organization},
    },
};
use std::fmt;
use url::{form_urlencoded, Url};

/// Message the API returns for an anonymous visitor. It is not an error.
pub const SIGN_IN_REQUIRED: &str = "Please sign in first";

pub const ACCOUNT_PATH: &str = "/api/get-account";
pub const LOGOUT_PATH: &str = "/api/logout";

/// Credentials taken from the page URL and forwarded to the account fetch.
#[derive(Clone, PartialEq, Eq)]
pub enum AccountQuery {
    AccessToken(String),
    Credentials { username: String, password: String },
}

impl fmt::Debug for AccountQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessToken(_) => f.write_str("AccessToken(..)"),
            Self::Credentials { username, .. } => f
                .debug_struct("Credentials")
                .field("username", username)
                .finish_non_exhaustive(),
        }
    }
}

impl AccountQuery {
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        match self {
            Self::AccessToken(token) => {
                serializer.append_pair("accessToken", token);
            }
            Self::Credentials { username, password } => {
                serializer
                    .append_pair("username", username)
                    .append_pair("password", password);
            }
        }
        serializer.finish()
    }
}

/// Reads the account query from a location search string (with or without `?`).
/// An access token wins over a username/password pair; a lone username or
/// password is ignored.
pub fn account_query(search: &str) -> Option<AccountQuery> {
    let mut access_token = None;
    let mut username = None;
    let mut password = None;

    for (key, value) in form_urlencoded::parse(search.trim_start_matches('?').as_bytes()) {
        match key.as_ref() {
            "access_token" if access_token.is_none() => access_token = Some(value.into_owned()),
            "username" if username.is_none() => username = Some(value.into_owned()),
            "password" if password.is_none() => password = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(token) = access_token {
        return Some(AccountQuery::AccessToken(token));
    }
    match (username, password) {
        (Some(username), Some(password)) => Some(AccountQuery::Credentials { username, password }),
        _ => None,
    }
}

/// The page URL with its whole query string removed. The fragment is kept.
pub fn url_without_query(href: &str) -> Option<String> {
    let mut url = Url::parse(href).ok()?;
    url.set_query(None);
    Some(url.into())
}

/// Path of the single account fetch issued on load.
pub fn account_path(query: Option<&AccountQuery>) -> String {
    match query {
        Some(query) => format!("{ACCOUNT_PATH}?{}", query.to_query_string()),
        None => ACCOUNT_PATH.to_string(),
    }
}

/// Outcome of the account fetch: the session to store and an optional message
/// to surface as an error notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub session: Session,
    pub error: Option<String>,
}

impl Resolution {
    pub fn resolve(result: Result<ApiResponse<Account, Organization>, AppError>) -> Self {
        match result {
            Ok(response) if response.is_ok() => match response.data {
                Some(mut account) => {
                    account.organization = response.data2;
                    Self {
                        session: Session::Authenticated(account),
                        error: None,
                    }
                }
                None => Self::anonymous(Some("empty account payload".to_string())),
            },
            Ok(response) if response.msg == SIGN_IN_REQUIRED => Self::anonymous(None),
            Ok(response) => Self::anonymous(Some(response.msg)),
            Err(err) => Self::anonymous(Some(err.to_string())),
        }
    }

    fn anonymous(error: Option<String>) -> Self {
        Self {
            session: Session::Anonymous,
            error: error.map(|msg| format!("Failed to sign in: {msg}")),
        }
    }
}

/// Notice to show after a logout call; `Ok` means the session was cleared.
pub fn logout_result(result: Result<ApiResponse, AppError>) -> Result<String, String> {
    match result {
        Ok(response) if response.is_ok() => Ok("Logged out successfully".to_string()),
        Ok(response) => Err(format!("Failed to log out: {}", response.msg)),
        Err(err) => Err(format!("Failed to log out: {err}")),
    }
}
