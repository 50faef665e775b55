//! Top bar: view title, sidebar/theme toggles, and the user menu.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::{Menu, Theme, UiState};
use crate::util::{format, storage, theme};

#[component]
pub fn Header(on_logout: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let title = move || ui.get().active_menu.label();
    let name = move || session.get().display_name();
    let role = move || session.get().user.map(|u| u.role).unwrap_or_default();
    let theme_label = move || if ui.get().theme == Theme::Dark { "☀" } else { "☾" };

    let toggle_sidebar = move |_| {
        ui.update(|u| {
            u.sidebar_collapsed = !u.sidebar_collapsed;
            u.mobile_sidebar_open = !u.mobile_sidebar_open;
        });
    };
    let toggle_theme = move |_| {
        let next = theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };
    let open_profile = move |_| {
        ui.update(|u| u.navigate(Menu::Profile));
        storage::save_active_menu(Menu::Profile);
    };
    let open_change_password = move |_| {
        ui.update(|u| {
            u.user_menu_open = false;
            u.show_change_password = true;
        });
    };
    let logout = move |_| {
        ui.update(|u| u.user_menu_open = false);
        on_logout.run(());
    };

    view! {
        <header class="header">
            <button class="header__icon-btn" aria-label="Toggle sidebar" on:click=toggle_sidebar>
                "☰"
            </button>
            <h1 class="header__title">{title}</h1>
            <div class="header__actions">
                <button class="header__icon-btn" aria-label="Toggle theme" on:click=toggle_theme>
                    {theme_label}
                </button>
                <div class="user-menu">
                    <button
                        class="user-menu__trigger"
                        on:click=move |_| ui.update(|u| u.user_menu_open = !u.user_menu_open)
                    >
                        <span class="avatar avatar--sm">{move || format::initials(&name())}</span>
                        <span class="user-menu__name">{name}</span>
                        <span class="user-menu__role">{role}</span>
                    </button>
                    <Show when=move || ui.get().user_menu_open>
                        <ul class="user-menu__dropdown">
                            <li>
                                <button on:click=open_profile>"My Profile"</button>
                            </li>
                            <li>
                                <button on:click=open_change_password>"Change Password"</button>
                            </li>
                            <li>
                                <button class="user-menu__logout" on:click=logout>
                                    "Logout"
                                </button>
                            </li>
                        </ul>
                    </Show>
                </div>
            </div>
        </header>
    }
}
