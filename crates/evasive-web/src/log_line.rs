#![forbid(unsafe_code)]

//! Flatten a tracing event into one console line: `message key=value ...`.

use std::fmt::Write as _;

use tracing::field::{Field, Visit};

/// Field visitor collecting the `message` field and the rest as `key=value`.
#[derive(Debug, Default)]
pub struct LineVisitor {
    message: Option<String>,
    fields: String,
}

impl LineVisitor {
    /// Rendered line; events without a message show only their fields.
    #[must_use]
    pub fn finish(self, target: &str) -> String {
        let head = self.message.unwrap_or_else(|| target.to_string());
        if self.fields.is_empty() {
            head
        } else {
            format!("{head}{}", self.fields)
        }
    }

    fn push(&mut self, field: &Field, value: std::fmt::Arguments<'_>) {
        let _ = write!(self.fields, " {}={}", field.name(), value);
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.push(field, format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}").trim_matches('"').to_string());
        } else {
            self.push(field, format_args!("{value:?}"));
        }
    }
}
