//! Client-side Todo Filtering
//!
//! Pure predicate filtering over the in-memory collection. The server is
//! only consulted for the body search; everything here runs on every
//! keystroke against whatever was last fetched.

use crate::models::Todo;

/// Search criteria narrowing the displayed collection.
///
/// Unset criteria match everything. An empty search string counts as
/// unset too, so clearing an input box re-widens the list without the
/// caller having to swap the field back to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFilter {
    pub owner: Option<String>,
    pub body: Option<String>,
    pub status: Option<bool>,
    pub category: Option<String>,
}

impl TodoFilter {
    pub fn matches(&self, todo: &Todo) -> bool {
        contains_search(&self.owner, &todo.owner)
            && contains_search(&self.body, &todo.body)
            && contains_search(&self.category, &todo.category)
            && self.status.map_or(true, |status| todo.status == status)
    }
}

/// Case-insensitive substring containment; empty or missing search text
/// matches everything.
fn contains_search(search: &Option<String>, value: &str) -> bool {
    match search {
        Some(text) if !text.is_empty() => value.to_lowercase().contains(&text.to_lowercase()),
        _ => true,
    }
}

/// Returns the todos matching every supplied criterion, in their
/// original order. The input is left untouched.
pub fn filter_todos(todos: &[Todo], filter: &TodoFilter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, owner: &str, status: bool, body: &str, category: &str) -> Todo {
        Todo {
            id: id.to_string(),
            owner: owner.to_string(),
            status,
            body: body.to_string(),
            category: category.to_string(),
        }
    }

    fn test_todos() -> Vec<Todo> {
        vec![
            todo("chris_id", "Chris", true, "UMM", "video games"),
            todo("pat_id", "Pat", false, "IBM", "software design"),
            todo("jamie_id", "Jamie", true, "Frogs, Inc.", "video games"),
        ]
    }

    #[test]
    fn no_criteria_returns_everything_in_order() {
        let todos = test_todos();
        let filtered = filter_todos(&todos, &TodoFilter::default());
        assert_eq!(filtered, todos);
    }

    #[test]
    fn owner_search_is_case_insensitive_substring() {
        let filter = TodoFilter {
            owner: Some("c".to_string()),
            ..Default::default()
        };
        let filtered = filter_todos(&test_todos(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].owner, "Chris");
    }

    #[test]
    fn status_search_keeps_matching_records_in_order() {
        let filter = TodoFilter {
            status: Some(true),
            ..Default::default()
        };
        let filtered = filter_todos(&test_todos(), &filter);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].owner, "Chris");
        assert_eq!(filtered[1].owner, "Jamie");
    }

    #[test]
    fn combined_criteria_intersect() {
        let filter = TodoFilter {
            owner: Some("i".to_string()),
            status: Some(true),
            ..Default::default()
        };
        let filtered = filter_todos(&test_todos(), &filter);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].owner, "Chris");
        assert_eq!(filtered[1].owner, "Jamie");
    }

    #[test]
    fn body_search_matches_substring() {
        let filter = TodoFilter {
            body: Some("m".to_string()),
            ..Default::default()
        };
        let filtered = filter_todos(&test_todos(), &filter);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].body, "UMM");
        assert_eq!(filtered[1].body, "IBM");
    }

    #[test]
    fn category_search_matches_substring() {
        let filter = TodoFilter {
            category: Some("VIDEO".to_string()),
            ..Default::default()
        };
        let filtered = filter_todos(&test_todos(), &filter);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn empty_search_text_matches_everything() {
        let filter = TodoFilter {
            owner: Some(String::new()),
            body: Some(String::new()),
            category: Some(String::new()),
            status: None,
        };
        let filtered = filter_todos(&test_todos(), &filter);
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn input_is_not_mutated() {
        let todos = test_todos();
        let filter = TodoFilter {
            status: Some(false),
            ..Default::default()
        };
        let _ = filter_todos(&todos, &filter);
        assert_eq!(todos, test_todos());
    }
}
