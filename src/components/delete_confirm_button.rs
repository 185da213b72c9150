//! Delete Confirm Button Component

use leptos::prelude::*;

/// Two-step delete: `×` arms it, then "Delete?" asks for ✓ or ✗
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button class="confirm-btn" on:click=move |_| on_confirm.run(())>"✓"</button>
                    <button class="cancel-btn" on:click=move |_| armed.set(false)>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class=button_class.clone() title="Delete" on:click=move |_| armed.set(true)>
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
