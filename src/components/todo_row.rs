//! Todo Row Component

use leptos::prelude::*;
use todo_store::TodoItem;

use crate::components::DeleteConfirmButton;
use crate::context::use_todos;

/// One todo with its completion checkbox and delete control
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let todos = use_todos();

    let done = item.done;
    let toggle_id = item.id.clone();
    let remove_id = item.id;

    view! {
        <li class=if done { "todo-row done" } else { "todo-row" }>
            <input
                type="checkbox"
                checked=done
                on:change=move |_| todos.toggle_done(&toggle_id)
            />
            <span class="todo-title">{item.title}</span>
            <DeleteConfirmButton
                button_class="delete-btn"
                on_confirm=move |_| todos.remove(&remove_id)
            />
        </li>
    }
}
