//! Todo List Component
//!
//! The list view: search inputs, the filtered table, and the add-todo
//! panel. Criteria live here as ephemeral signals and the visible rows
//! are recomputed on every input event; the body search additionally
//! keeps the service's accumulated URL current so a refresh asks the
//! server for the same subset.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::TodoService;
use crate::components::{AddTodoForm, StatusSelector};
use crate::context::AppContext;
use crate::filter::{filter_todos, TodoFilter};
use crate::models::Todo;
use crate::store::{use_app_store, AppStateStoreFields};

/// List view with filtering and the add-todo form
#[component]
pub fn TodoList(service: RwSignal<TodoService>) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (owner_search, set_owner_search) = signal(String::new());
    let (body_search, set_body_search) = signal(String::new());
    let (category_search, set_category_search) = signal(String::new());
    let (status_search, set_status_search) = signal::<Option<bool>>(None);
    let (show_add_form, set_show_add_form) = signal(false);

    let filtered = move || {
        let criteria = TodoFilter {
            owner: Some(owner_search.get()),
            body: Some(body_search.get()),
            status: status_search.get(),
            category: Some(category_search.get()),
        };
        filter_todos(&store.todos().get(), &criteria)
    };

    let read_input = |ev: &web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        input.value()
    };

    let on_added = move |id: String| {
        ctx.set_highlighted(Some(id));
        set_show_add_form.set(false);
        ctx.reload();
    };

    view! {
        <div class="todo-list">
            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search owner..."
                    prop:value=move || owner_search.get()
                    on:input=move |ev| set_owner_search.set(read_input(&ev))
                />
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search body..."
                    prop:value=move || body_search.get()
                    on:input=move |ev| {
                        let text = read_input(&ev);
                        // Keep the server-side search URL in step with the box.
                        service.update(|svc| {
                            svc.filter_by_body(if text.is_empty() { None } else { Some(&text) });
                        });
                        set_body_search.set(text);
                    }
                />
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search category..."
                    prop:value=move || category_search.get()
                    on:input=move |ev| set_category_search.set(read_input(&ev))
                />
                <StatusSelector
                    current=status_search
                    on_change=move |value| set_status_search.set(value)
                />
                <button type="button" class="refresh-btn" on:click=move |_| ctx.reload()>
                    "Refresh"
                </button>
                <button
                    type="button"
                    class="add-btn"
                    on:click=move |_| set_show_add_form.update(|open| *open = !*open)
                >
                    "Add Todo"
                </button>
            </div>

            {move || show_add_form.get().then(|| view! {
                <AddTodoForm
                    service=service
                    on_added=on_added
                    on_cancel=move |_: ()| set_show_add_form.set(false)
                />
            })}

            <table class="todo-table">
                <thead>
                    <tr>
                        <th>"Owner"</th>
                        <th>"Status"</th>
                        <th>"Body"</th>
                        <th>"Category"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let highlighted = ctx.highlighted.get();
                        filtered().into_iter().map(|todo| {
                            let Todo { id, owner, status, body, category } = todo;
                            let is_highlighted = highlighted.as_deref() == Some(id.as_str());
                            view! {
                                <tr class=if is_highlighted { "todo-row highlighted" } else { "todo-row" }>
                                    <td class="todo-owner">{owner}</td>
                                    <td class="todo-status">{if status { "Complete" } else { "Incomplete" }}</td>
                                    <td class="todo-body">{body}</td>
                                    <td class="todo-category">{category}</td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>

            <p class="todo-count">
                {move || format!("{} of {} todos shown", filtered().len(), store.todos().get().len())}
            </p>
        </div>
    }
}
