//! Loading indicators for list views.

use leptos::prelude::*;

use crate::state::listing::Spinner;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader loader--page">
            <div class="spinner"></div>
        </div>
    }
}

/// Full-page spinner until the first fetch completes, then the content with
/// an overlay during refreshes.
#[component]
pub fn ListBody(spinner: Signal<Spinner>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || spinner.get() != Spinner::FullPage fallback=|| view! { <Loader /> }>
            <div class="list-body">
                {children()}
                <Show when=move || spinner.get() == Spinner::Overlay>
                    <div class="loader loader--overlay">
                        <div class="spinner"></div>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
