//! Authenticated shell: sidebar, header, and the active view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the root gate once a session exists. The sidebar selects a
//! `Menu`; exactly one page component is mounted at a time, so leaving a
//! view unmounts it and stops its timers.

use leptos::prelude::*;

use super::active_users::ActiveUsersPage;
use super::activity_report::ActivityReportPage;
use super::change_log::ChangeLogPage;
use super::configs::ConfigsPage;
use super::documentation::DocumentationPage;
use super::profile::ProfilePage;
use super::roles::RolesPage;
use super::summary_report::SummaryReportPage;
use super::transactions::TransactionsPage;
use super::user_security::UserSecurityPage;
use super::users::UsersPage;
use super::workspaces::WorkspacesPage;
use crate::components::change_password_dialog::ChangePasswordDialog;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::net::api::ApiClient;
use crate::state::session::SessionState;
use crate::state::ui::{Menu, UiState};
use crate::util::storage;

fn render_menu(menu: Menu) -> AnyView {
    match menu {
        Menu::Users => view! { <UsersPage /> }.into_any(),
        Menu::Roles => view! { <RolesPage /> }.into_any(),
        Menu::UserSecurity => view! { <UserSecurityPage /> }.into_any(),
        Menu::ActiveUsers => view! { <ActiveUsersPage /> }.into_any(),
        Menu::Configs => view! { <ConfigsPage /> }.into_any(),
        Menu::ActivityReport => view! { <ActivityReportPage /> }.into_any(),
        Menu::SummaryReport => view! { <SummaryReportPage /> }.into_any(),
        Menu::Workspaces => view! { <WorkspacesPage /> }.into_any(),
        Menu::Transactions => view! { <TransactionsPage /> }.into_any(),
        Menu::ChangeLog => view! { <ChangeLogPage /> }.into_any(),
        Menu::Profile => view! { <ProfilePage /> }.into_any(),
        Menu::Documentation => view! { <DocumentationPage /> }.into_any(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();

    // Only a menu change remounts the view; theme or dropdown toggles do not.
    let active = Memo::new(move |_| ui.with(|u| u.active_menu));

    let logout = Callback::new(move |()| {
        if session.try_update(SessionState::begin_logout) != Some(true) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            // Failures are logged by the client; the local session is cleared regardless.
            api.logout().await.ok();
            storage::clear_session();
            session.try_update(SessionState::logout_finished);
        });
    });

    let shell_class = move || {
        if ui.with(|u| u.sidebar_collapsed) { "shell shell--collapsed" } else { "shell" }
    };

    view! {
        <div class=shell_class>
            <Sidebar />
            <div class="shell__main">
                <Header on_logout=logout />
                <main class="shell__content">{move || render_menu(active.get())}</main>
            </div>
            <Show when=move || ui.with(|u| u.show_change_password)>
                <ChangePasswordDialog />
            </Show>
        </div>
    }
}
