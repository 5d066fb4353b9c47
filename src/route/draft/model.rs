use std::borrow::Cow;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const TITLE_MIN: usize = 3;
pub const CONTENT_MIN: usize = 10;
pub const CONTENT_MAX: usize = 500;

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
	let mut error = ValidationError::new(code);
	error.message = Some(Cow::Borrowed(message));
	error
}

/// Lengths are counted in characters, ignoring surrounding whitespace.
fn validate_title(title: &str) -> Result<(), ValidationError> {
	match title.trim().chars().count() {
		0 => Err(invalid("required", "Title is required")),
		n if n < TITLE_MIN => Err(invalid(
			"too_short",
			"Title must be at least 3 characters long",
		)),
		_ => Ok(()),
	}
}

fn validate_content(content: &str) -> Result<(), ValidationError> {
	match content.trim().chars().count() {
		0 => Err(invalid("required", "Content is required")),
		n if n < CONTENT_MIN => Err(invalid(
			"too_short",
			"Content must be at least 10 characters long",
		)),
		n if n > CONTENT_MAX => Err(invalid(
			"too_long",
			"Content must be at most 500 characters long",
		)),
		_ => Ok(()),
	}
}

/// A post written through the "new post" form. Drafts are checked
/// and normalized, but never stored.
#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate, PartialEq, Eq)]
pub struct PostDraft {
	#[validate(custom(function = "validate_title"))]
	pub title: String,
	#[validate(custom(function = "validate_content"))]
	pub content: String,
}

impl PostDraft {
	/// Strips surrounding whitespace from both fields.
	pub fn trimmed(self) -> Self {
		Self {
			title: self.title.trim().to_owned(),
			content: self.content.trim().to_owned(),
		}
	}
}
