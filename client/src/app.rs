//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the host for SSR; `App` is hydrated in the browser.
//! Persisted session, theme, and last view live in `localStorage`, which the
//! server cannot see, so the root renders a loader until an effect has
//! restored them in the browser. That keeps server and first client markup
//! identical.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::loading::Loader;
use crate::components::toast_stack::ToastStack;
use crate::net::api::ApiClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::{session::SessionState, toast::ToastState, ui::UiState};
use crate::util::client_config::{API_BASE_META, api_base_url};
use crate::util::notify::Notifier;
use crate::util::{storage, theme};

/// HTML shell rendered on the server for SSR + hydration. `api_base_url` is
/// published to the browser through a meta tag.
pub fn shell(options: LeptosOptions, api_base_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared contexts: session, UI, toasts (through `Notifier`),
/// and the API client.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(Notifier::new(toasts, session));
    provide_context(ApiClient::browser(api_base_url()));

    Effect::new(move || {
        let preference = theme::read_preference();
        theme::apply(preference);
        let menu = storage::load_active_menu();
        ui.update(|u| {
            u.theme = preference;
            if let Some(menu) = menu {
                u.active_menu = menu;
            }
        });
        let token = storage::load_token();
        session.update(|s| s.restore(token.as_deref(), storage::load_user()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/adminpanel.css"/>
        <Title text="Admin Panel"/>
        <Meta name="description" content="User, role, and configuration administration"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootPage/>
            </Routes>
        </Router>
        <ToastStack/>
    }
}

/// Session gate: loader until restored, then login or the dashboard.
#[component]
fn RootPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let restored = Memo::new(move |_| session.with(|s| s.restored));
    let logged_in = Memo::new(move |_| session.with(SessionState::is_logged_in));

    move || {
        if !restored.get() {
            view! { <Loader/> }.into_any()
        } else if logged_in.get() {
            view! { <DashboardPage/> }.into_any()
        } else {
            view! { <LoginPage/> }.into_any()
        }
    }
}
