//! Browser localStorage helpers for the persisted session and UI choices.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only client state that survives a reload: the bearer token, the
//! signed-in user, the last active menu, and the theme. Everything is
//! hydrate-only; SSR reads nothing and writes nothing.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::User;
use crate::state::ui::Menu;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const ACTIVE_MENU_KEY: &str = "activeMenu";
pub const THEME_KEY: &str = "theme";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_string(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_string(key, &raw);
}

/// The persisted bearer token; blank counts as absent.
pub fn load_token() -> Option<String> {
    load_string(TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

pub fn load_user() -> Option<User> {
    load_json(USER_KEY)
}

pub fn save_session(token: &str, user: Option<&User>) {
    save_string(TOKEN_KEY, token);
    match user {
        Some(user) => save_json(USER_KEY, user),
        None => remove(USER_KEY),
    }
}

/// Forget the token and user. Always runs on logout, even if the server
/// call failed.
pub fn clear_session() {
    remove(TOKEN_KEY);
    remove(USER_KEY);
}

pub fn load_active_menu() -> Option<Menu> {
    load_string(ACTIVE_MENU_KEY).and_then(|id| Menu::from_id(&id))
}

pub fn save_active_menu(menu: Menu) {
    save_string(ACTIVE_MENU_KEY, menu.id());
}
