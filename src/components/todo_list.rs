//! Entry List Component
//!
//! Renders fetched entries in server order with a delete action per row.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::store::{ViewState, ViewStateStoreFields};

/// List of fetched entries.
#[component]
pub fn ToDoList(
    state: Store<ViewState>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="todo-list">
            <p class="header">"ToDo List"</p>
            <For
                each=move || state.todos().get()
                key=|entry| entry.to_do_id.clone()
                children=move |entry| {
                    let id = entry.to_do_id.clone();
                    view! {
                        <div>
                            <div class="todo-container">
                                <div>
                                    <p class="todo-title">{entry.title.clone()}</p>
                                    <p>{entry.description.clone()}</p>
                                </div>
                                <div>
                                    <button
                                        class="delete-btn"
                                        on:click=move |_| on_delete.run(id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                            <hr />
                        </div>
                    }
                }
            />
        </div>
    }
}
