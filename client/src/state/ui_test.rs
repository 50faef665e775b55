use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_on_users() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.active_menu, Menu::Users);
    assert!(!state.sidebar_collapsed);
    assert!(!state.show_change_password);
}

#[test]
fn navigate_closes_transient_menus() {
    let mut state = UiState { mobile_sidebar_open: true, user_menu_open: true, ..UiState::default() };
    state.navigate(Menu::Configs);
    assert_eq!(state.active_menu, Menu::Configs);
    assert!(!state.mobile_sidebar_open);
    assert!(!state.user_menu_open);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parse_and_toggle() {
    assert_eq!(Theme::parse("dark"), Theme::Dark);
    assert_eq!(Theme::parse("DARK"), Theme::Light);
    assert_eq!(Theme::Dark.toggled().as_str(), "light");
}

// =============================================================
// Menu
// =============================================================

#[test]
fn menu_ids_round_trip_and_are_unique() {
    for menu in Menu::ALL {
        assert_eq!(Menu::from_id(menu.id()), Some(menu));
    }
    let mut ids: Vec<_> = Menu::ALL.iter().map(|m| m.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), Menu::ALL.len());
    assert_eq!(Menu::from_id("sales"), None);
}
