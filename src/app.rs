//! Todo Frontend App
//!
//! Opens the persisted store once and lays out the form and the list.

use leptos::prelude::*;
use todo_store::{StoreConfig, TodoStore};

use crate::components::{NewTodoForm, TodoListView};
use crate::context::TodoContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    let store = TodoStore::open(BrowserStorage, StoreConfig::default());
    log::info!("[APP] Starting with {} todos", store.items().len());

    let ctx = TodoContext::new(store);
    provide_context(ctx);

    view! {
        <main class="todo-app">
            <h1>"Todo"</h1>

            <NewTodoForm />

            <TodoListView />

            <p class="todo-count">
                {move || {
                    let counts = ctx.counts();
                    format!(
                        "{} items, {} done, {} left",
                        counts.total, counts.done, counts.remaining
                    )
                }}
            </p>
        </main>
    }
}
