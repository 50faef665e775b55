//! Search box with an inline busy indicator.

use leptos::prelude::*;

#[component]
pub fn SearchInput(
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] busy: Option<Signal<bool>>,
    #[prop(into, default = "Search...".to_owned())] placeholder: String,
) -> impl IntoView {
    let busy = move || busy.is_some_and(|b| b.get());
    view! {
        <div class="search">
            <Show when=busy fallback=|| view! { <span class="search__icon">"⌕"</span> }>
                <span class="spinner spinner--sm"></span>
            </Show>
            <input
                class="search__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
