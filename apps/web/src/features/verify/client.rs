//! Client wrappers for the login and send-code endpoints. Bodies carry codes
//! and passwords and must never be logged.

use crate::{
    app_lib::{post_form_with_credentials, post_json_with_credentials, AppError},
    features::{
        session::types::ApiResponse,
        verify::{
            oauth::{login_path, OAuthParams},
            request::{SendCodeArgs, LOGIN_PATH, SEND_CODE_PATH},
        },
    },
};
use serde::Serialize;

/// Posts a login body, forwarding an in-progress OAuth authorization.
pub async fn login<B: Serialize>(
    body: &B,
    oauth: Option<&OAuthParams>,
) -> Result<ApiResponse, AppError> {
    post_json_with_credentials(&login_path(LOGIN_PATH, oauth), body).await
}

/// Asks the API to deliver a one-time code to the destination.
pub async fn send_code(args: &SendCodeArgs) -> Result<ApiResponse, AppError> {
    post_form_with_credentials(SEND_CODE_PATH, args.to_form()).await
}
