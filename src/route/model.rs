use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// Query parameters shared by the data-backed pages and endpoints.
#[derive(Debug, Default, Deserialize, Validate, JsonSchema)]
pub struct RefreshInput {
	/// Fetch from the upstream API even if the current data is still fresh.
	#[serde(default)]
	pub refresh: bool,
}

#[derive(Debug, Deserialize, Validate, JsonSchema)]
pub struct IdInput {
	/// The numeric id, as assigned by the upstream API.
	#[validate(range(min = 1))]
	pub id: i64,
}
