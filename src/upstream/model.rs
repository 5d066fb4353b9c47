use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A post as served by the placeholder API.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiPost {
	pub user_id: i64,
	pub id: i64,
	pub title: String,
	pub body: String,
}

/// A user as served by the placeholder API.
///
/// The same shape is rendered on the users page, since
/// nothing about a user is transformed locally.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: i64,
	/// The full display name, used as the author name of posts.
	pub name: String,
	#[serde(default)]
	pub username: String,
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub phone: String,
	#[serde(default)]
	pub website: String,
	#[serde(default)]
	pub address: Address,
	#[serde(default)]
	pub company: Company,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Address {
	pub street: String,
	pub suite: String,
	pub city: String,
	pub zipcode: String,
	pub geo: Geo,
}

/// Coordinates are kept as strings, exactly as the API returns them.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Geo {
	pub lat: String,
	pub lng: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
	pub name: String,
	pub catch_phrase: String,
	pub bs: String,
}
