//! Navigation highlighter: maps the current path to the key of the menu item to
//! highlight, and builds the menu for the signed-in account.

use crate::features::session::state::Session;

/// Key used when no menu item matches.
pub const NO_SELECTION: i32 = -1;

#[derive(Clone, Copy, Debug)]
enum Matcher {
    Exact(&'static str),
    Contains(&'static str),
}

impl Matcher {
    fn matches(self, path: &str) -> bool {
        match self {
            Matcher::Exact(expected) => path == expected,
            Matcher::Contains(fragment) => path.contains(fragment),
        }
    }
}

/// Ordered table; the first matching entry wins, so `/organizations/acme/users`
/// highlights Organizations.
const MENU_KEYS: &[(Matcher, i32)] = &[
    (Matcher::Exact("/"), 0),
    (Matcher::Contains("organizations"), 1),
    (Matcher::Contains("users"), 2),
    (Matcher::Contains("providers"), 3),
    (Matcher::Contains("applications"), 4),
    (Matcher::Contains("ldaps"), 5),
    (Matcher::Contains("tokens"), 6),
    (Matcher::Contains("signup"), 100),
    (Matcher::Contains("login"), 101),
    (Matcher::Contains("result"), 100),
];

pub fn menu_key(path: &str) -> i32 {
    MENU_KEYS
        .iter()
        .find(|(matcher, _)| matcher.matches(path))
        .map_or(NO_SELECTION, |(_, key)| *key)
}

/// Remembers the last path seen so the key is only recomputed when the live
/// path actually changes (including browser back/forward).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuTracker {
    path: Option<String>,
    key: i32,
}

impl Default for MenuTracker {
    fn default() -> Self {
        Self {
            path: None,
            key: NO_SELECTION,
        }
    }
}

impl MenuTracker {
    /// Returns `true` when the path differed and the key was recomputed.
    pub fn sync(&mut self, path: &str) -> bool {
        if self.path.as_deref() == Some(path) {
            return false;
        }
        self.path = Some(path.to_string());
        self.key = menu_key(path);
        true
    }

    pub fn key(&self) -> i32 {
        self.key
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub key: i32,
    pub label: &'static str,
    pub href: &'static str,
    /// Leaves the console with a full page load instead of a client route.
    pub external: bool,
}

const fn item(key: i32, label: &'static str, href: &'static str) -> MenuItem {
    MenuItem {
        key,
        label,
        href,
        external: false,
    }
}

const HOME: MenuItem = item(0, "Home", "/");

const ADMIN_ITEMS: [MenuItem; 7] = [
    item(1, "Organizations", "/organizations"),
    item(2, "Users", "/users"),
    item(3, "Providers", "/providers"),
    item(4, "Applications", "/applications"),
    item(5, "LDAPs", "/ldaps"),
    item(6, "Tokens", "/tokens"),
    item(7, "Records", "/records"),
];

const SWAGGER: MenuItem = MenuItem {
    key: 7,
    label: "Swagger",
    href: "/swagger",
    external: true,
};

/// Menu for the current session; empty until an account is known.
pub fn menu_items(session: &Session) -> Vec<MenuItem> {
    let Some(account) = session.account() else {
        return Vec::new();
    };

    let mut items = vec![HOME];
    if account.is_admin_user() {
        items.extend(ADMIN_ITEMS);
    }
    items.push(SWAGGER);
    items
}

const DOOR_PAGES: [&str; 5] = ["/signup", "/login", "/callback", "/prompt", "/forget"];

/// Authentication pages render without the console header, menu and footer.
pub fn is_door_page(path: &str) -> bool {
    DOOR_PAGES.iter().any(|prefix| path.starts_with(prefix))
}
