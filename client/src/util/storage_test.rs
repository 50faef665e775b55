#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn reads_are_empty_outside_the_browser() {
    assert_eq!(load_token(), None);
    assert_eq!(load_user(), None);
    assert_eq!(load_active_menu(), None);
    assert_eq!(load_json::<Vec<u8>>("anything"), None);
}

#[test]
fn writes_are_callable_noops() {
    save_session("tok", Some(&User::default()));
    save_active_menu(Menu::Roles);
    clear_session();
    assert_eq!(load_token(), None);
}

#[test]
fn keys_match_persisted_layout() {
    assert_eq!([TOKEN_KEY, USER_KEY, ACTIVE_MENU_KEY, THEME_KEY], ["token", "user", "activeMenu", "theme"]);
}
