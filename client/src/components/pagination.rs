//! Pagination bar shared by every list view.

use leptos::prelude::*;

use crate::state::pagination::PaginationView;

/// First/Prev, numbered window, Next/Last, and the "Showing X to Y" label.
#[component]
pub fn Pagination(state: Signal<PaginationView>, on_page: Callback<u64>) -> impl IntoView {
    let go_prev = move |_| on_page.run(state.get_untracked().current.saturating_sub(1).max(1));
    let go_next = move |_| {
        let view = state.get_untracked();
        on_page.run((view.current + 1).min(view.total_pages.max(1)));
    };
    let go_last = move |_| on_page.run(state.get_untracked().total_pages.max(1));

    view! {
        <div class="pagination">
            <span class="pagination__info">{move || state.get().label()}</span>
            <nav class="pagination__nav" aria-label="Page navigation">
                <button
                    class="pagination__btn"
                    title="First Page"
                    disabled=move || state.get().first_disabled
                    on:click=move |_| on_page.run(1)
                >
                    "«"
                </button>
                <button
                    class="pagination__btn"
                    title="Previous Page"
                    disabled=move || state.get().prev_disabled
                    on:click=go_prev
                >
                    "‹"
                </button>
                <For
                    each=move || state.get().pages
                    key=|page| *page
                    children=move |page| {
                        let class = move || {
                            if state.get().current == page {
                                "pagination__btn pagination__btn--active"
                            } else {
                                "pagination__btn"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| on_page.run(page)>
                                {page}
                            </button>
                        }
                    }
                />
                <button
                    class="pagination__btn"
                    title="Next Page"
                    disabled=move || state.get().next_disabled
                    on:click=go_next
                >
                    "›"
                </button>
                <button
                    class="pagination__btn"
                    title="Last Page"
                    disabled=move || state.get().last_disabled
                    on:click=go_last
                >
                    "»"
                </button>
            </nav>
        </div>
    }
}
