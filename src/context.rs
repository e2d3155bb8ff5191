//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload todos from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload todos from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Most recently added todo id, highlighted in the list - read
    pub highlighted: ReadSignal<Option<String>>,
    /// Most recently added todo id - write
    set_highlighted: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        highlighted: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            highlighted: highlighted.0,
            set_highlighted: highlighted.1,
        }
    }

    /// Trigger a refetch of the collection
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Mark a todo as the one to highlight in the list
    pub fn set_highlighted(&self, id: Option<String>) {
        self.set_highlighted.set(id);
    }
}
