//! Fixed-position stack rendering the toast queue.

use leptos::prelude::*;

use crate::state::toast::Toast;
use crate::util::notify::Notifier;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<Notifier>().toasts();

    view! {
        <div class="toast-stack" aria-live="assertive" aria-atomic="true">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="alert">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Close"
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
