//! Page modules, one per sidebar view plus login.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view-scoped state (list binding, forms, dialogs) and
//! delegates shared rendering to `components`.

pub mod active_users;
pub mod activity_report;
pub mod change_log;
pub mod configs;
pub mod dashboard;
pub mod documentation;
pub mod login;
pub mod profile;
pub mod roles;
pub mod summary_report;
pub mod transactions;
pub mod user_security;
pub mod users;
pub mod workspaces;
