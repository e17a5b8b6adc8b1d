//! Component View State
//!
//! Reactive state owned by a single `ToDoPanel` instance, using
//! `reactive_stores` for field-level access. The remote list is the source
//! of truth; `todos` is a cache replaced wholesale on every successful
//! fetch, never patched in place.

use reactive_stores::Store;

use crate::models::{Draft, ToDo};

/// View state for one panel instance. Process-local, never persisted.
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Entry being composed in the form; mutated on every keystroke.
    pub draft: Draft,
    /// Entries as last fetched, in server order.
    pub todos: Vec<ToDo>,
    /// A fetch or create is in flight.
    pub loading: bool,
    /// Message text of the last failure, cleared on field edit.
    pub error: Option<String>,
}

impl ViewState {
    /// A panel starts out loading; the mount effect issues the first fetch.
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Which of the three mutually exclusive projections to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Failed,
    Ready,
}

/// Loading wins over error, error wins over content.
pub fn view_phase(loading: bool, has_error: bool) -> ViewPhase {
    if loading {
        ViewPhase::Loading
    } else if has_error {
        ViewPhase::Failed
    } else {
        ViewPhase::Ready
    }
}
