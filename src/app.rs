//! Todo Tracker App
//!
//! Top-level component: wires the store, the API service, and the list
//! view, and owns the load-on-demand effect.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::TodoService;
use crate::components::TodoList;
use crate::config;
use crate::context::AppContext;
use crate::store::{store_replace_todos, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let service = RwSignal::new(TodoService::new(&config::api_url()));

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (highlighted, set_highlighted) = signal::<Option<String>>(None);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (highlighted, set_highlighted),
    ));

    // Load the collection on mount and on every reload request. A failed
    // fetch leaves whatever was last loaded on screen.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let svc = service.get_untracked();
        spawn_local(async move {
            match svc.get_todos().await {
                Ok(todos) => store_replace_todos(&store, todos),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[API] loading todos failed: {}", err).into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Todo Tracker"</h1>
                <TodoList service=service />
            </main>
        </div>
    }
}
