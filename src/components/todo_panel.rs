//! To-Do Panel Component
//!
//! Owns the view state and wires the creation form, the entry list, and
//! the remote sync calls together.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{ToDoForm, ToDoList};
use crate::config::ApiConfig;
use crate::models::Draft;
use crate::store::{view_phase, ViewPhase, ViewState, ViewStateStoreFields};

/// Validation message for a draft with blank fields.
const EMPTY_FIELDS_MSG: &str = "Fields can't be empty";

/// Refetch the list and replace it wholesale. Shows the loading indicator
/// while the request is in flight and always clears it on settle.
async fn load_entries(api: ApiClient, state: Store<ViewState>) {
    state.loading().set(true);
    match api.fetch_all().await {
        Ok(entries) => {
            web_sys::console::log_1(&format!("[ToDo] Loaded {} entries", entries.len()).into());
            state.todos().set(entries);
        }
        Err(e) => state.error().set(Some(e.to_string())),
    }
    state.loading().set(false);
}

/// The whole to-do panel: form, list, loading and error projections.
#[component]
pub fn ToDoPanel(config: ApiConfig) -> impl IntoView {
    let api = StoredValue::new(ApiClient::new(&config));
    let state = Store::new(ViewState::new());

    // Initial fetch on mount.
    Effect::new(move |_| {
        spawn_local(load_entries(api.get_value(), state));
    });

    let on_submit = Callback::new(move |_: ()| {
        let draft = state.draft().get();
        if draft.is_blank() {
            state.error().set(Some(EMPTY_FIELDS_MSG.to_string()));
            return;
        }
        state.loading().set(true);
        spawn_local(async move {
            match api.get_value().create(&draft.to_create_payload()).await {
                Ok(created) => {
                    web_sys::console::log_1(
                        &format!("[ToDo] Created entry {}", created.to_do_id).into(),
                    );
                    state.draft().set(Draft::default());
                    load_entries(api.get_value(), state).await;
                }
                // Draft stays intact so the user can resubmit without retyping.
                Err(e) => state.error().set(Some(e.to_string())),
            }
            state.loading().set(false);
        });
    });

    // The delete round-trip itself shows no indicator; the refetch after a
    // successful delete does.
    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            match api.get_value().delete(&id).await {
                Ok(()) => load_entries(api.get_value(), state).await,
                Err(e) => state.error().set(Some(e.to_string())),
            }
        });
    });

    view! {
        <div class="todo-panel">
            {move || match view_phase(state.loading().get(), state.error().read().is_some()) {
                ViewPhase::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                ViewPhase::Failed => {
                    view! {
                        <p class="error">
                            "Error occurred: " {move || state.error().get().unwrap_or_default()}
                        </p>
                    }
                        .into_any()
                }
                ViewPhase::Ready => {
                    view! {
                        <div>
                            <ToDoForm state=state on_submit=on_submit />
                            <ToDoList state=state on_delete=on_delete />
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
