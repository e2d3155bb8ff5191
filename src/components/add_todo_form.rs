//! Add Todo Form Component
//!
//! Form for creating new todos, validated field by field on every
//! keystroke. Submission stays disabled while any rule is violated; the
//! server assigns the id and the parent is told about it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::TodoService;
use crate::models::NewTodo;
use crate::validation::{first_violation, is_valid, Rule, CATEGORY_RULES, OWNER_RULES, STATUS_RULES};

/// Form for creating a new todo
#[component]
pub fn AddTodoForm(
    service: RwSignal<TodoService>,
    #[prop(into)] on_added: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (owner, set_owner) = signal(String::new());
    let (status, set_status) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (category, set_category) = signal(String::new());
    // Required-field messages only appear after a submit attempt, so an
    // untouched form doesn't open covered in red.
    let (submitted, set_submitted) = signal(false);

    let form_valid = move || {
        is_valid(OWNER_RULES, &owner.get())
            && is_valid(STATUS_RULES, &status.get())
            && is_valid(CATEGORY_RULES, &category.get())
    };

    let field_error = move |rules: &[Rule], value: ReadSignal<String>| {
        let value = value.get();
        if value.is_empty() && !submitted.get() {
            None
        } else {
            first_violation(rules, &value)
        }
    };

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitted.set(true);
        if !form_valid() {
            return;
        }
        let new_todo = NewTodo {
            owner: owner.get(),
            status: status.get().eq_ignore_ascii_case("true"),
            body: body.get(),
            category: category.get(),
        };
        let svc = service.get_untracked();
        spawn_local(async move {
            match svc.add_new_todo(&new_todo).await {
                Ok(id) => on_added.run(id),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[API] adding todo failed: {}", err).into(),
                    );
                }
            }
        });
    };

    let read_input = |ev: &web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        input.value()
    };

    view! {
        <form class="add-todo-form" on:submit=add_todo>
            <div class="form-field">
                <label>"Owner"</label>
                <input
                    type="text"
                    placeholder="Who owns this todo?"
                    prop:value=move || owner.get()
                    on:input=move |ev| set_owner.set(read_input(&ev))
                />
                {move || field_error(OWNER_RULES, owner).map(|msg| view! {
                    <span class="field-error">{msg}</span>
                })}
            </div>

            <div class="form-field">
                <label>"Status"</label>
                <input
                    type="text"
                    placeholder="true or false"
                    prop:value=move || status.get()
                    on:input=move |ev| set_status.set(read_input(&ev))
                />
                {move || field_error(STATUS_RULES, status).map(|msg| view! {
                    <span class="field-error">{msg}</span>
                })}
            </div>

            <div class="form-field">
                <label>"Body"</label>
                <input
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || body.get()
                    on:input=move |ev| set_body.set(read_input(&ev))
                />
            </div>

            <div class="form-field">
                <label>"Category"</label>
                <input
                    type="text"
                    placeholder="Category"
                    prop:value=move || category.get()
                    on:input=move |ev| set_category.set(read_input(&ev))
                />
                {move || field_error(CATEGORY_RULES, category).map(|msg| view! {
                    <span class="field-error">{msg}</span>
                })}
            </div>

            <div class="form-actions">
                <button type="submit" prop:disabled=move || !form_valid()>
                    "Add Todo"
                </button>
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
