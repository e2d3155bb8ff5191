//! Todo Server Bindings
//!
//! HTTP calls for the todo endpoints, one async function per operation.
//! The service also owns the accumulated search URL so repeated body
//! filters edit the same query string instead of stacking duplicates.

use reqwest::Client;

use crate::models::{NewTodo, Todo};
use crate::query::apply_filter;

/// Client for the todo endpoints under `<API_URL>todos`.
#[derive(Debug, Clone)]
pub struct TodoService {
    base_url: String,
    todo_url: String,
    client: Client,
}

impl TodoService {
    pub fn new(api_url: &str) -> Self {
        let base_url = format!("{}todos", api_url);
        Self {
            todo_url: base_url.clone(),
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The URL the next `get_todos` call will hit, including any
    /// accumulated query parameters.
    pub fn todo_url(&self) -> &str {
        &self.todo_url
    }

    /// Sets, replaces, or clears the `body` search parameter on the
    /// accumulated URL. Empty or missing text clears it, restoring the
    /// URL to its pre-filter state; other parameters pass through
    /// untouched.
    pub fn filter_by_body(&mut self, body: Option<&str>) {
        self.todo_url = apply_filter(&self.todo_url, "body", body);
    }

    /// Fetches the collection through the accumulated search URL.
    pub async fn get_todos(&self) -> Result<Vec<Todo>, String> {
        self.client
            .get(&self.todo_url)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .json::<Vec<Todo>>()
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn get_todo_by_id(&self, id: &str) -> Result<Todo, String> {
        self.client
            .get(format!("{}/{}", self.base_url, id))
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .json::<Todo>()
            .await
            .map_err(|e| e.to_string())
    }

    /// Creates a todo. The server answers with the assigned id as plain
    /// text, not JSON. Creation always targets the bare collection URL;
    /// an active body search must not leak into the POST.
    pub async fn add_new_todo(&self, new_todo: &NewTodo) -> Result<String, String> {
        self.client
            .post(format!("{}/new", self.base_url))
            .json(new_todo)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .text()
            .await
            .map_err(|e| e.to_string())
    }
}
