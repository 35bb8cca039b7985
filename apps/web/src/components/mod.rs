//! Shared UI components exported for routes and features.

pub(crate) mod layout;
pub(crate) mod ui;
mod verify_modal;

pub(crate) use layout::AppShell;
pub(crate) use ui::{Alert, Button, Spinner};
pub(crate) use verify_modal::VerifyModal;
