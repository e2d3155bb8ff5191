//! Form Field Validation
//!
//! Declarative rule tables for the add-todo form. Each field maps to an
//! ordered list of rules; a rule is a predicate over the raw input text
//! plus the message shown when the predicate rejects it. Nothing here
//! touches the presentation layer.

/// One validation rule. `check` returns true when the value is
/// acceptable to this rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub key: &'static str,
    pub message: &'static str,
    pub check: fn(&str) -> bool,
}

impl Rule {
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

/// Rules for the owner field, in display order. Length and pattern
/// rules pass on empty input so an untouched field only reports
/// "required".
pub const OWNER_RULES: &[Rule] = &[
    Rule {
        key: "required",
        message: "Owner is required",
        check: |value| !value.is_empty(),
    },
    Rule {
        key: "minlength",
        message: "Owner must be at least 2 characters long",
        check: |value| value.is_empty() || value.chars().count() >= 2,
    },
    Rule {
        key: "maxlength",
        message: "Owner cannot be more than 25 characters long",
        check: |value| value.chars().count() <= 25,
    },
    Rule {
        key: "pattern",
        message: "Owner must contain only numbers and letters",
        check: |value| {
            value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        },
    },
];

/// Rules for the status field. The input is free text; only the boolean
/// literals are accepted.
pub const STATUS_RULES: &[Rule] = &[
    Rule {
        key: "pattern",
        message: "Status must be either true or false",
        check: |value| {
            value.is_empty()
                || value.eq_ignore_ascii_case("true")
                || value.eq_ignore_ascii_case("false")
        },
    },
    Rule {
        key: "required",
        message: "Status is required",
        check: |value| !value.is_empty(),
    },
];

/// Category has no fixed format; screens that need one append their own
/// `Rule` to a copy of this table.
pub const CATEGORY_RULES: &[Rule] = &[];

/// Every message whose rule rejects `value`, in declaration order.
pub fn violations(rules: &[Rule], value: &str) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|rule| !rule.is_satisfied_by(value))
        .map(|rule| rule.message)
        .collect()
}

/// The message displayed for a field: its first violated rule.
pub fn first_violation(rules: &[Rule], value: &str) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| !rule.is_satisfied_by(value))
        .map(|rule| rule.message)
}

pub fn is_valid(rules: &[Rule], value: &str) -> bool {
    rules.iter().all(|rule| rule.is_satisfied_by(value))
}
