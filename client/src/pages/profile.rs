//! The signed-in user's profile card, avatar management, and activity feed.
//!
//! DESIGN
//! ======
//! The profile is fetched fresh from `/api/profile` rather than trusted
//! from the persisted login response, then written back to the session so
//! the header avatar follows uploads and removals.

use leptos::prelude::*;

use crate::components::loading::Loader;
use crate::net::api::ApiClient;
use crate::net::types::{ActivityLog, User};
use crate::state::feed::{FEED_PAGE_SIZE, FeedState};
use crate::state::session::SessionState;
use crate::util::notify::Notifier;
use crate::util::{format, storage};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();
    let session = expect_context::<RwSignal<SessionState>>();
    let base_url = api.base_url().to_owned();

    let profile = RwSignal::new(None::<User>);
    let feed = RwSignal::new(FeedState::<ActivityLog>::new(FEED_PAGE_SIZE));
    let uploading = RwSignal::new(false);

    let api_profile = api.clone();
    let load_profile = Callback::new(move |()| {
        let api = api_profile.clone();
        leptos::task::spawn_local(async move {
            match api.profile().await {
                Ok(user) => {
                    storage::save_json(storage::USER_KEY, &user);
                    session.try_update(|s| s.user = Some(user.clone()));
                    profile.try_set(Some(user));
                }
                Err(e) => notifier.report_failure(&e, "Error loading profile"),
            }
        });
    });

    let api_feed = api.clone();
    let load_more = Callback::new(move |()| {
        let Some(Some((limit, offset))) = feed.try_update(FeedState::begin_next) else {
            return;
        };
        let api = api_feed.clone();
        leptos::task::spawn_local(async move {
            let result = api.profile_activity(limit, offset).await;
            if let Err(e) = &result {
                notifier.report_failure(e, "Failed to load activity");
            }
            feed.try_update(|f| f.apply(result));
        });
    });

    // Avatar changes are logged server-side; restart the feed so they show.
    let reload_feed = Callback::new(move |()| {
        if feed.try_update(FeedState::reset).is_some() {
            load_more.run(());
        }
    });

    Effect::new(move || {
        load_profile.run(());
        load_more.run(());
    });

    let api_remove = api.clone();
    let remove_avatar = move |_| {
        let api = api_remove.clone();
        leptos::task::spawn_local(async move {
            let result = api.remove_avatar().await;
            if notifier.report(&result, "Profile picture removed", "Failed to remove profile picture") {
                load_profile.run(());
                reload_feed.run(());
            }
        });
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            uploading.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.upload_avatar(&file).await;
                uploading.try_set(false);
                if notifier.report(&result, "Profile picture updated", "Failed to upload profile picture") {
                    load_profile.run(());
                    reload_feed.run(());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, &api);
    };

    let card = move || {
        let Some(user) = profile.get() else {
            return view! { <Loader /> }.into_any();
        };
        let has_picture = !user.profile_picture.trim().is_empty();
        let avatar = match format::avatar_url(&base_url, &user) {
            Some(src) => view! { <img class="avatar avatar--xl" src=src alt="" /> }.into_any(),
            None => view! { <span class="avatar avatar--xl">{format::initials(&user.name)}</span> }.into_any(),
        };
        let remove_avatar = remove_avatar.clone();
        let on_file = on_file.clone();
        view! {
            <div class="profile-card">
                {avatar}
                <h2 class="profile-card__name">{user.name.clone()}</h2>
                <p class="profile-card__email">{user.email.clone()}</p>
                <span class="badge">{user.role.clone()}</span>
                <dl class="profile-card__facts">
                    <dt>"Status"</dt>
                    <dd>{if user.is_active { "Active" } else { "Inactive" }}</dd>
                    <dt>"Last login"</dt>
                    <dd>{format::format_datetime(user.last_login.as_deref(), "Never")}</dd>
                    <dt>"Last logout"</dt>
                    <dd>{format::format_datetime(user.last_logout.as_deref(), "-")}</dd>
                </dl>
                <div class="profile-card__actions">
                    <label class="btn btn--primary">
                        {move || if uploading.get() { "Uploading..." } else { "Change Picture" }}
                        <input type="file" accept="image/*" class="visually-hidden" on:change=on_file />
                    </label>
                    <Show when=move || has_picture>
                        <button class="btn btn--danger" on:click=remove_avatar.clone()>
                            "Remove"
                        </button>
                    </Show>
                </div>
            </div>
        }
        .into_any()
    };

    let activity = move || {
        feed.with(|f| {
            f.items
                .iter()
                .map(|log| {
                    view! {
                        <li class="activity-feed__item">
                            <span class="badge">{log.action.clone()}</span>
                            <span class="activity-feed__details">{log.details.clone()}</span>
                            <span class="activity-feed__time">
                                {format::format_datetime(log.created_at.as_deref(), "-")}
                            </span>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="page page--profile">
            {card}
            <div class="activity-feed">
                <h3>"Recent Activity"</h3>
                <ul class="activity-feed__list">{activity}</ul>
                <Show when=move || feed.with(|f| f.items.is_empty() && !f.loading)>
                    <p class="table__empty">"No activity yet"</p>
                </Show>
                <Show when=move || feed.with(|f| f.has_more)>
                    <button
                        class="btn activity-feed__more"
                        disabled=move || feed.with(|f| f.loading)
                        on:click=move |_| load_more.run(())
                    >
                        {move || if feed.with(|f| f.loading) { "Loading..." } else { "Load More" }}
                    </button>
                </Show>
            </div>
        </section>
    }
}
