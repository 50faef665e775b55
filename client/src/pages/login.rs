//! Login page: email + password against `POST /login`.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::session::{SessionState, login_failure_message, validate_login};
use crate::state::ui::{Theme, UiState};
use crate::util::{storage, theme};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let busy = move || !matches!(session.get().phase, crate::state::session::SessionPhase::LoggedOut);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(message) = validate_login(&email_value, &password_value) {
            session.update(|s| s.notice = Some(message.to_owned()));
            return;
        }
        let Some(true) = session.try_update(SessionState::begin_login) else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.login(&email_value, &password_value).await {
                Ok(resp) => {
                    let token = resp.token.unwrap_or_default();
                    storage::save_session(&token, resp.user.as_ref());
                    password.set(String::new());
                    session.update(|s| s.login_succeeded(resp.user));
                }
                Err(e) => {
                    #[cfg(feature = "hydrate")]
                    log::warn!("login failed: {e}");
                    session.update(|s| s.login_failed(login_failure_message(&e)));
                }
            }
        });
    };

    let toggle_theme = move |_| {
        let next = theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <div class="login-page">
            <button class="login-page__theme" aria-label="Toggle theme" on:click=toggle_theme>
                {move || if ui.get().theme == Theme::Dark { "☀" } else { "☾" }}
            </button>
            <div class="login-card">
                <h1>"AdminPanel"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            autocomplete="username"
                            placeholder="admin@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <div class="login-password">
                            <input
                                class="login-input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="login-password__toggle"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>
                    <Show when=move || session.get().notice.is_some()>
                        <p class="login-message" role="alert">
                            {move || session.get().notice.unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
