//! The account state every route guard reads.

use crate::features::session::types::Account;

/// Account state for the current page load.
///
/// `Unknown` and `Anonymous` must stay distinct: guards render nothing while the
/// account fetch is in flight, and only redirect once it has answered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unknown,
    Anonymous,
    Authenticated(Account),
}

impl Session {
    pub fn account(&self) -> Option<&Account> {
        match self {
            Session::Authenticated(account) => Some(account),
            Session::Unknown | Session::Anonymous => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        self.account().is_some_and(Account::is_admin_user)
    }
}

/// Document title and favicon derived from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Branding {
    /// `None` keeps the current title.
    pub title: Option<String>,
    pub favicon: String,
}

impl Branding {
    pub fn for_session(session: &Session, default_favicon: &str) -> Self {
        match session.account().and_then(|account| account.organization.as_ref()) {
            Some(organization) => Self {
                title: Some(organization.display_name.clone()),
                favicon: if organization.favicon.is_empty() {
                    default_favicon.to_string()
                } else {
                    organization.favicon.clone()
                },
            },
            None => Self {
                title: None,
                favicon: default_favicon.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::session::types::Organization;

    fn account(owner: &str) -> Account {
        Account {
            owner: owner.to_string(),
            name: "alice".to_string(),
            organization: Some(Organization {
                display_name: "Acme".to_string(),
                favicon: "https://acme.test/favicon.ico".to_string(),
                ..Organization::default()
            }),
            ..Account::default()
        }
    }

    #[test]
    fn default_session_is_unknown() {
        let session = Session::default();
        assert!(session.is_loading());
        assert!(!session.is_authenticated());
        assert!(session.account().is_none());
    }

    #[test]
    fn anonymous_is_neither_loading_nor_authenticated() {
        let session = Session::Anonymous;
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn authenticated_exposes_account() {
        let session = Session::Authenticated(account("built-in"));
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert_eq!(session.account().map(|a| a.name.as_str()), Some("alice"));

        assert!(!Session::Authenticated(account("acme")).is_admin());
    }

    #[test]
    fn branding_follows_the_organization() {
        let branding = Branding::for_session(&Session::Authenticated(account("acme")), "/d.ico");
        assert_eq!(branding.title.as_deref(), Some("Acme"));
        assert_eq!(branding.favicon, "https://acme.test/favicon.ico");

        for session in [Session::Unknown, Session::Anonymous] {
            let branding = Branding::for_session(&session, "/d.ico");
            assert_eq!(branding.title, None);
            assert_eq!(branding.favicon, "/d.ico");
        }
    }
}
