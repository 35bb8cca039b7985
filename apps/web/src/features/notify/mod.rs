//! Transient success/error notices shown in the top corner of every page.

#[cfg(target_arch = "wasm32")]
mod context;
pub(crate) mod queue;

#[cfg(target_arch = "wasm32")]
pub(crate) use context::{use_notices, NoticeContext, NoticeProvider};
