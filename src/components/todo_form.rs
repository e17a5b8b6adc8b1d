//! Creation Form Component
//!
//! Draft entry editing and submission. Editing a field clears any error;
//! validation happens on submit, in the panel.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::store::{ViewState, ViewStateStoreFields};

/// Form for composing a new entry.
#[component]
pub fn ToDoForm(
    state: Store<ViewState>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <div class="form-field">
                <label>"Title: "</label>
                <input
                    type="text"
                    class="input-title"
                    name="title"
                    placeholder="enter title"
                    prop:value=move || state.draft().read().title.clone()
                    on:input=move |ev| {
                        state.draft().write().title = event_target_value(&ev);
                        state.error().set(None);
                    }
                />
            </div>

            <div class="form-field">
                <label>"Description: "</label>
                <input
                    type="text"
                    class="input-desc"
                    name="description"
                    placeholder="enter description"
                    prop:value=move || state.draft().read().description.clone()
                    on:input=move |ev| {
                        state.draft().write().description = event_target_value(&ev);
                        state.error().set(None);
                    }
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="submit-btn">
                    {move || if state.loading().get() { "POSTING" } else { "POST" }}
                </button>
            </div>
        </form>
    }
}
