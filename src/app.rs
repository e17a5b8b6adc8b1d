//! App Root
//!
//! Resolves the API configuration and mounts the to-do panel.

use leptos::prelude::*;

use crate::components::ToDoPanel;
use crate::config::ApiConfig;

#[component]
pub fn App() -> impl IntoView {
    match ApiConfig::from_window() {
        Ok(config) => view! { <ToDoPanel config=config /> }.into_any(),
        Err(e) => {
            web_sys::console::error_1(&format!("[ToDo] Config error: {}", e).into());
            view! { <p class="config-error">"Error occurred: " {e.to_string()}</p> }.into_any()
        }
    }
}
