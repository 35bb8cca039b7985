//! Account payloads returned by the identity API. They describe the signed-in
//! principal only; passwords are never part of these types.

use crate::app_lib::config::BUILT_IN_ORGANIZATION;
use serde::{Deserialize, Serialize};

/// Status value the API uses for a successful operation.
pub const STATUS_OK: &str = "ok";

/// Tagged response body shared by every API endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<D = serde_json::Value, D2 = serde_json::Value> {
    pub status: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<D>,
    #[serde(default)]
    pub data2: Option<D2>,
}

impl<D, D2> ApiResponse<D, D2> {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub owner: String,
    pub name: String,
    pub display_name: String,
    pub website_url: String,
    pub favicon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// The signed-in principal. `organization` is filled from the `data2` part of
/// the account response.
pub struct Account {
    pub owner: String,
    pub name: String,
    pub display_name: String,
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub is_admin: bool,
    pub is_global_admin: bool,
    pub organization: Option<Organization>,
}

impl Account {
    /// `owner/name` identifier used by the API.
    pub fn id(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Members of the built-in organization and global admins manage the console.
    pub fn is_admin_user(&self) -> bool {
        self.owner == BUILT_IN_ORGANIZATION || self.is_global_admin
    }
}

/// Colors used for accounts without an avatar image.
const AVATAR_COLORS: [&str; 4] = ["#f56a00", "#7265e6", "#ffbf00", "#00a2ae"];

/// Last `/`-separated segment of a name.
pub fn short_name(value: &str) -> &str {
    value.rsplit('/').next().unwrap_or(value)
}

/// Picks a stable avatar color from the name's string hash.
pub fn avatar_color(name: &str) -> &'static str {
    let hash = name.encode_utf16().fold(0_i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });
    AVATAR_COLORS[(hash.unsigned_abs() % 4) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_response_deserializes_with_organization() {
        let body = json!({
            "status": "ok",
            "msg": "",
            "data": {
                "owner": "built-in",
                "name": "admin",
                "displayName": "Admin",
                "avatar": "https://cdn.example.com/admin.png",
                "email": "admin@example.com",
                "isGlobalAdmin": true,
                "password": ""
            },
            "data2": {
                "owner": "admin",
                "name": "built-in",
                "displayName": "Built-in Organization",
                "favicon": "https://cdn.example.com/favicon.ico"
            }
        });

        let response: ApiResponse<Account, Organization> =
            serde_json::from_value(body).expect("valid account response");
        assert!(response.is_ok());

        let account = response.data.expect("account data");
        assert_eq!(account.id(), "built-in/admin");
        assert_eq!(account.display_name, "Admin");
        assert!(account.is_global_admin);
        assert_eq!(account.organization, None);

        let organization = response.data2.expect("organization data");
        assert_eq!(organization.display_name, "Built-in Organization");
    }

    #[test]
    fn error_response_has_no_data() {
        let response: ApiResponse<Account, Organization> =
            serde_json::from_value(json!({"status": "error", "msg": "Please sign in first", "data": null}))
                .expect("valid error response");
        assert!(!response.is_ok());
        assert_eq!(response.msg, "Please sign in first");
        assert!(response.data.is_none());
        assert!(response.data2.is_none());
    }

    #[test]
    fn admin_is_built_in_member_or_global_admin() {
        let member = Account {
            owner: "built-in".to_string(),
            name: "alice".to_string(),
            ..Account::default()
        };
        assert!(member.is_admin_user());

        let global = Account {
            owner: "acme".to_string(),
            is_global_admin: true,
            ..Account::default()
        };
        assert!(global.is_admin_user());

        let org_admin = Account {
            owner: "acme".to_string(),
            is_admin: true,
            ..Account::default()
        };
        assert!(!org_admin.is_admin_user());
    }

    #[test]
    fn short_name_keeps_last_segment() {
        assert_eq!(short_name("acme/alice"), "alice");
        assert_eq!(short_name("alice"), "alice");
        assert_eq!(short_name(""), "");
    }

    #[test]
    fn avatar_color_is_stable_per_name() {
        assert_eq!(avatar_color("alice"), avatar_color("alice"));
        assert!(AVATAR_COLORS.contains(&avatar_color("bob")));
        assert_eq!(avatar_color(""), AVATAR_COLORS[0]);
    }
}
