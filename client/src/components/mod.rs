//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and shared list widgets while
//! reading/writing shared state from Leptos context providers.

pub mod change_password_dialog;
pub mod dialog;
pub mod header;
pub mod loading;
pub mod pagination;
pub mod search_input;
pub mod sidebar;
pub mod toast_stack;
