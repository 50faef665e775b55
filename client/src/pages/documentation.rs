//! Bundled API reference, browsable by section and searchable.

use leptos::prelude::*;

use crate::util::markdown::{self, DocSection};

const API_REFERENCE: &str = include_str!("../../docs/api_reference.md");

#[component]
pub fn DocumentationPage() -> impl IntoView {
    let sections = StoredValue::new(markdown::split_sections(API_REFERENCE));
    let first = sections.with_value(|all| all.first().map(|s| s.id.clone()).unwrap_or_default());
    let active = RwSignal::new(first);
    let term = RwSignal::new(String::new());

    let visible = Memo::new(move |_| {
        let term = term.get();
        sections.with_value(|all| markdown::filter_sections(all, &term).into_iter().cloned().collect::<Vec<DocSection>>())
    });

    let nav = move || {
        visible
            .get()
            .into_iter()
            .map(|s| {
                let id = s.id.clone();
                let is_active = {
                    let id = id.clone();
                    move || active.with(|a| *a == id)
                };
                view! {
                    <li>
                        <button
                            class="docs__nav-item"
                            class=("docs__nav-item--active", is_active)
                            on:click=move |_| active.set(id.clone())
                        >
                            {s.title}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    // A search shows every match; otherwise only the selected section.
    let content = move || {
        let shown = visible.get();
        let searching = term.with(|t| !t.trim().is_empty());
        let html: String = if searching {
            shown.iter().map(|s| markdown::render_markdown_html(&s.markdown)).collect()
        } else {
            let id = active.get();
            shown
                .iter()
                .find(|s| s.id == id)
                .or_else(|| shown.first())
                .map(|s| markdown::render_markdown_html(&s.markdown))
                .unwrap_or_default()
        };
        if html.is_empty() {
            view! { <p class="table__empty">"No matching endpoints"</p> }.into_any()
        } else {
            view! { <article class="docs__content markdown" inner_html=html></article> }.into_any()
        }
    };

    view! {
        <section class="page docs">
            <aside class="docs__nav">
                <input
                    class="input"
                    type="search"
                    placeholder="Search the API..."
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <ul>{nav}</ul>
            </aside>
            {content}
        </section>
    }
}
