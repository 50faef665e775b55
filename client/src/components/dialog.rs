//! Modal shell and the confirmation dialog used before destructive actions.

use leptos::prelude::*;

/// Backdrop plus dialog box. Clicking the backdrop closes.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let class = if wide { "dialog dialog--wide" } else { "dialog" };
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class=class role="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Asks for explicit confirmation; cancel fires nothing.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    message: Signal<String>,
    #[prop(into, default = "Delete".to_owned())] confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="dialog__message">{move || message.get()}</p>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                    {confirm_label}
                </button>
            </div>
        </Modal>
    }
}

/// Inline error line inside a form.
#[component]
pub fn FormError(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="form-error" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
