//! Two-factor login payloads. Codes are secrets: the `Debug` output of the form
//! redacts them and nothing here logs.

use crate::{app_lib::AppError, features::session::types::ApiResponse};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use url::form_urlencoded;

pub const SEND_CODE_PATH: &str = "/api/send-verification-code";
pub const LOGIN_PATH: &str = "/api/login";

/// Seconds before another code can be requested from the login page.
pub const LOGIN_COOL_DOWN_SECS: u32 = 60;

/// Owner of every organization record.
const ORGANIZATION_OWNER: &str = "admin";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Channel {
    Email,
    Phone,
}

impl Channel {
    /// Email when the destination looks like an address, phone otherwise.
    pub fn for_destination(destination: &str) -> Self {
        if destination.contains('@') {
            Channel::Email
        } else {
            Channel::Phone
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Phone => "Phone",
        }
    }

    /// Lower-cased name the send-code endpoint expects.
    pub fn code_type(self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Phone => "phone",
        }
    }
}

/// Organization that owns the user being verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrganizationRef {
    pub owner: String,
    pub name: String,
}

impl OrganizationRef {
    pub fn id(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Everything the dialog is opened with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationRequest {
    pub channel: Channel,
    pub address: String,
    pub organization: OrganizationRef,
    /// `organization/username`.
    pub user_id: String,
    pub cool_down_secs: u32,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Empty code")]
    EmptyCode,
    #[error("Verification is not open")]
    NotOpen,
}

/// Body posted to the login endpoint for a two-factor sign-in.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct TwoFactorForm {
    #[serde(rename = "wayOf2FA")]
    pub way_of_2fa: Channel,
    pub organization: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "emailCode", skip_serializing_if = "Option::is_none")]
    pub email_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "phoneCode", skip_serializing_if = "Option::is_none")]
    pub phone_code: Option<String>,
}

impl fmt::Debug for TwoFactorForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwoFactorForm")
            .field("way_of_2fa", &self.way_of_2fa)
            .field("organization", &self.organization)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl VerificationRequest {
    /// Request opened by the login page's code sign-in for `organization/username`.
    pub fn for_login(organization: &str, username: &str, destination: &str) -> Self {
        Self {
            channel: Channel::for_destination(destination),
            address: destination.to_string(),
            organization: OrganizationRef {
                owner: ORGANIZATION_OWNER.to_string(),
                name: organization.to_string(),
            },
            user_id: format!("{organization}/{username}"),
            cool_down_secs: LOGIN_COOL_DOWN_SECS,
        }
    }

    /// Builds the login body for the entered code. A blank code is rejected
    /// before anything is sent.
    pub fn form(&self, code: &str) -> Result<TwoFactorForm, VerifyError> {
        if code.trim().is_empty() {
            return Err(VerifyError::EmptyCode);
        }

        let (organization, username) = self
            .user_id
            .split_once('/')
            .unwrap_or((self.user_id.as_str(), ""));
        let mut form = TwoFactorForm {
            way_of_2fa: self.channel,
            organization: organization.to_string(),
            username: username.to_string(),
            email: None,
            email_code: None,
            phone: None,
            phone_code: None,
        };
        match self.channel {
            Channel::Email => {
                form.email = Some(self.address.clone());
                form.email_code = Some(code.to_string());
            }
            Channel::Phone => {
                form.phone = Some(self.address.clone());
                form.phone_code = Some(code.to_string());
            }
        }
        Ok(form)
    }

    pub fn send_code_args(&self) -> SendCodeArgs {
        let destination = if self.address.contains('@') {
            self.address.clone()
        } else {
            self.address
                .split_once('/')
                .map_or_else(|| self.address.clone(), |(_, rest)| rest.to_string())
        };
        SendCodeArgs {
            destination,
            code_type: self.channel.code_type(),
            organization_id: self.organization.id(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendCodeArgs {
    pub destination: String,
    pub code_type: &'static str,
    pub organization_id: String,
}

impl SendCodeArgs {
    pub fn to_form(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("dest", &self.destination)
            .append_pair("type", self.code_type)
            .append_pair("orgId", &self.organization_id)
            .finish()
    }
}

/// Notice for a send-code call; `Ok` starts the cool-down.
pub fn send_code_result(result: Result<ApiResponse, AppError>) -> Result<String, String> {
    match result {
        Ok(response) if response.is_ok() => Ok("Code sent".to_string()),
        Ok(response) => Err(format!("Failed to send code: {}", response.msg)),
        Err(err) => Err(format!("Failed to send code: {err}")),
    }
}

/// Body posted to the login endpoint for a password sign-in.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PasswordLogin {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub application: String,
    pub organization: String,
    pub username: String,
    pub password: String,
}

impl PasswordLogin {
    pub fn new(application: &str, organization: &str, username: &str, password: &str) -> Self {
        Self {
            kind: "login",
            application: application.to_string(),
            organization: organization.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for PasswordLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordLogin")
            .field("application", &self.application)
            .field("organization", &self.organization)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(channel: Channel, address: &str) -> VerificationRequest {
        VerificationRequest {
            channel,
            address: address.to_string(),
            organization: OrganizationRef {
                owner: "admin".to_string(),
                name: "org1".to_string(),
            },
            user_id: "org1/alice".to_string(),
            cool_down_secs: 60,
        }
    }

    #[test]
    fn email_form_has_exactly_the_expected_fields() {
        let form = request(Channel::Email, "a@b.com")
            .form("123456")
            .expect("non-empty code");
        assert_eq!(
            serde_json::to_value(&form).expect("serializable form"),
            json!({
                "wayOf2FA": "Email",
                "organization": "org1",
                "username": "alice",
                "email": "a@b.com",
                "emailCode": "123456"
            })
        );
    }

    #[test]
    fn phone_form_uses_phone_fields() {
        let form = request(Channel::Phone, "15512345678")
            .form("000111")
            .expect("non-empty code");
        assert_eq!(
            serde_json::to_value(&form).expect("serializable form"),
            json!({
                "wayOf2FA": "Phone",
                "organization": "org1",
                "username": "alice",
                "phone": "15512345678",
                "phoneCode": "000111"
            })
        );
    }

    #[test]
    fn blank_code_is_rejected() {
        let verification = request(Channel::Email, "a@b.com");
        assert_eq!(verification.form(""), Err(VerifyError::EmptyCode));
        assert_eq!(verification.form("   "), Err(VerifyError::EmptyCode));
        assert_eq!(VerifyError::EmptyCode.to_string(), "Empty code");
    }

    #[test]
    fn form_debug_hides_codes() {
        let form = request(Channel::Email, "a@b.com")
            .form("987654")
            .expect("non-empty code");
        assert!(!format!("{form:?}").contains("987654"));
    }

    #[test]
    fn send_code_args_follow_the_destination() {
        let email = request(Channel::Email, "a@b.com").send_code_args();
        assert_eq!(email.destination, "a@b.com");
        assert_eq!(email.code_type, "email");
        assert_eq!(email.organization_id, "admin/org1");
        assert_eq!(email.to_form(), "dest=a%40b.com&type=email&orgId=admin%2Forg1");

        let phone = request(Channel::Phone, "org1/15512345678").send_code_args();
        assert_eq!(phone.destination, "15512345678");
        assert_eq!(phone.code_type, "phone");
    }

    #[test]
    fn channel_is_chosen_from_destination() {
        assert_eq!(Channel::for_destination("a@b.com"), Channel::Email);
        assert_eq!(Channel::for_destination("+15512345678"), Channel::Phone);
    }

    #[test]
    fn login_page_request() {
        let verification = VerificationRequest::for_login("org1", "alice", "a@b.com");
        assert_eq!(verification.channel, Channel::Email);
        assert_eq!(verification.user_id, "org1/alice");
        assert_eq!(verification.organization.id(), "admin/org1");
        assert_eq!(verification.cool_down_secs, LOGIN_COOL_DOWN_SECS);

        let phone = VerificationRequest::for_login("org1", "alice", "15512345678");
        assert_eq!(phone.channel, Channel::Phone);
    }

    #[test]
    fn send_code_messages() {
        let ok = ApiResponse {
            status: "ok".to_string(),
            msg: String::new(),
            data: None,
            data2: None,
        };
        assert_eq!(send_code_result(Ok(ok)), Ok("Code sent".to_string()));
        assert_eq!(
            send_code_result(Err(AppError::Network("offline".to_string()))),
            Err("Failed to send code: Network error: offline".to_string())
        );
    }

    #[test]
    fn password_login_body() {
        let body = PasswordLogin::new("app-built-in", "built-in", "admin", "hunter2");
        assert_eq!(
            serde_json::to_value(&body).expect("serializable body"),
            json!({
                "type": "login",
                "application": "app-built-in",
                "organization": "built-in",
                "username": "admin",
                "password": "hunter2"
            })
        );
        assert!(!format!("{body:?}").contains("hunter2"));
    }
}
