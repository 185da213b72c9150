//! New Todo Form Component
//!
//! Text input plus "Add" button; Enter submits the form.

use leptos::prelude::*;

use crate::context::use_todos;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let todos = use_todos();
    let (new_title, set_new_title) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank titles are rejected by the store; keep the input as typed
        if todos.add(&new_title.get_untracked()) {
            set_new_title.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="What needs doing?"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
