use aide::{openapi::Tag, transform::TransformOpenApi};

use crate::{error, extract::Json};

pub mod tag {
	pub const POST: &str = "Post";
	pub const USER: &str = "User";
	pub const DRAFT: &str = "Draft";
}

pub fn docs(api: TransformOpenApi) -> TransformOpenApi {
	api.title("Travel Feed Open API")
		.summary("Posts and users from the placeholder API, with static fallbacks")
		.description(include_str!("../README.md"))
		.tag(Tag {
			name: tag::POST.into(),
			description: Some("Travel blog posts joined with their authors".into()),
			..Default::default()
		})
		.tag(Tag {
			name: tag::USER.into(),
			description: Some("The community user directory".into()),
			..Default::default()
		})
		.tag(Tag {
			name: tag::DRAFT.into(),
			description: Some("Validation for new posts".into()),
			..Default::default()
		})
		.default_response_with::<Json<error::ErrorResponse>, _>(|res| {
			res.example(error::ErrorResponse {
				success: false,
				errors: error::Message::new("error message")
					.field("optional field")
					.detail("key", "value")
					.into_vec(),
			})
		})
}
