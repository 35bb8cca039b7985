//! Client wrappers for the account endpoints. The tagged body is returned as is;
//! callers decide what a non-`ok` status means for them.

use crate::{
    app_lib::{get_json_with_credentials, post_empty_with_credentials, AppError},
    features::session::{
        gate::{account_path, AccountQuery, LOGOUT_PATH},
        types::{Account, ApiResponse, Organization},
    },
};

/// Fetches the current account, optionally authenticating with URL credentials.
/// The query carries secrets and must never be logged.
pub async fn get_account(
    query: Option<&AccountQuery>,
) -> Result<ApiResponse<Account, Organization>, AppError> {
    get_json_with_credentials(&account_path(query)).await
}

/// Clears the server-side session.
pub async fn logout() -> Result<ApiResponse, AppError> {
    post_empty_with_credentials(LOGOUT_PATH).await
}
