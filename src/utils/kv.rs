//! Value → label lookup for option lists (select boxes, status columns)

use serde::{Deserialize, Serialize};

/// Label returned when no option carries the queried value
pub const NOT_FOUND_LABEL: &str = "no matching value";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LabelOption<T> {
    pub value: T,
    pub label: String,
}

impl<T> LabelOption<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Label of the first option whose value equals `value`, or [`NOT_FOUND_LABEL`].
pub fn label_by_value<'a, T: PartialEq>(value: &T, options: &'a [LabelOption<T>]) -> &'a str {
    options
        .iter()
        .find(|option| option.value == *value)
        .map(|option| option.label.as_str())
        .unwrap_or(NOT_FOUND_LABEL)
}
