//! Deployed commit history from `/api/changelog`.

use leptos::prelude::*;

use crate::components::loading::Loader;
use crate::net::api::ApiClient;
use crate::net::types::Commit;
use crate::util::format;
use crate::util::notify::Notifier;

#[component]
pub fn ChangeLogPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let notifier = expect_context::<Notifier>();
    let commits = RwSignal::new(None::<Vec<Commit>>);

    let load = Callback::new(move |()| {
        commits.set(None);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.change_log().await {
                Ok(list) => {
                    commits.try_set(Some(list));
                }
                Err(e) => {
                    commits.try_set(Some(Vec::new()));
                    notifier.report_failure(&e, "Failed to fetch change log");
                }
            }
        });
    });
    Effect::new(move || load.run(()));

    let timeline = move || match commits.get() {
        None => view! { <Loader /> }.into_any(),
        Some(list) if list.is_empty() => view! { <p class="table__empty">"No commits found"</p> }.into_any(),
        Some(list) => view! {
            <ol class="timeline">
                {list
                    .into_iter()
                    .map(|c| {
                        view! {
                            <li class="timeline__item">
                                <div class="timeline__message">{c.message.clone()}</div>
                                <div class="timeline__meta">
                                    <code class="timeline__hash">{format::short_hash(&c.hash).to_owned()}</code>
                                    <span>{c.author.clone()}</span>
                                    <span>{format::format_datetime(Some(&c.date), &c.date)}</span>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        }
        .into_any(),
    };

    view! {
        <section class="page">
            <div class="page__toolbar">
                <button class="btn" on:click=move |_| load.run(())>
                    "Refresh"
                </button>
            </div>
            {timeline}
        </section>
    }
}
