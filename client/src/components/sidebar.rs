//! Navigation sidebar grouped by section.

use leptos::prelude::*;

use crate::state::ui::{Menu, UiState};
use crate::util::storage;

const SECTIONS: [&str; 5] = ["Management", "Security", "Business", "Reports", "System"];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let class = move || {
        let state = ui.get();
        let mut class = String::from("sidebar");
        if state.sidebar_collapsed {
            class.push_str(" sidebar--collapsed");
        }
        if state.mobile_sidebar_open {
            class.push_str(" sidebar--open");
        }
        class
    };

    let sections = SECTIONS
        .iter()
        .map(|section| {
            let items = Menu::ALL
                .into_iter()
                .filter(|m| m.section() == *section)
                .map(|menu| {
                    let item_class = move || {
                        if ui.get().active_menu == menu { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
                    };
                    view! {
                        <li>
                            <button
                                class=item_class
                                title=menu.label()
                                on:click=move |_| {
                                    ui.update(|u| u.navigate(menu));
                                    storage::save_active_menu(menu);
                                }
                            >
                                <span class="sidebar__label">{menu.label()}</span>
                            </button>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="sidebar__section">
                    <div class="sidebar__heading">{*section}</div>
                    <ul class="sidebar__list">{items}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <aside class=class>
            <div class="sidebar__brand">"AdminPanel"</div>
            <nav class="sidebar__nav">{sections}</nav>
        </aside>
        <Show when=move || ui.get().mobile_sidebar_open>
            <div class="sidebar-scrim" on:click=move |_| ui.update(|u| u.mobile_sidebar_open = false)></div>
        </Show>
    }
}
