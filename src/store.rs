//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The full collection as last fetched from the server
    pub todos: Vec<Todo>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the collection wholesale after a successful fetch. This is
/// the only write the collection ever sees; there is no partial merge.
pub fn store_replace_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}
