//! Todo List View Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_todos;

/// All todos in insertion order
#[component]
pub fn TodoListView() -> impl IntoView {
    let todos = use_todos();

    view! {
        <ul class="todo-list">
            <For
                each=move || todos.items()
                // done is part of the key so a toggled row re-renders
                key=|item| (item.id.clone(), item.done)
                children=|item| view! { <TodoRow item=item /> }
            />
        </ul>
    }
}
