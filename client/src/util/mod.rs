//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod client_config;
pub mod debounce;
pub mod download;
pub mod format;
pub mod list_binding;
pub mod markdown;
pub mod notify;
pub mod page_size;
pub mod storage;
pub mod theme;
