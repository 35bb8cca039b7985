//! Domain-level frontend features (session, navigation, verification, notices)
//! and their shared logic. Routes and components import these modules to keep
//! view code focused while API handling and state rules stay testable natively.

pub(crate) mod navigation;
pub(crate) mod notify;
pub(crate) mod session;
pub(crate) mod verify;
