use std::sync::LazyLock;

use regex::Regex;

use super::escape;
use crate::{feed::Post, upstream::User};

/// Shown in place of the author when a post's user is unknown.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

const AVATAR_COLORS: [&str; 8] = [
	"bg-rose-500",
	"bg-blue-500",
	"bg-green-500",
	"bg-purple-500",
	"bg-amber-500",
	"bg-indigo-500",
	"bg-pink-500",
	"bg-cyan-500",
];

static PHONE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(\d)?(\d{3})(\d{3})(\d{4})").unwrap());

/// Up to two upper-case initials from the words of `name`.
pub fn initials(name: &str) -> String {
	name.split(' ')
		.filter_map(|word| word.chars().next())
		.collect::<String>()
		.to_uppercase()
		.chars()
		.take(2)
		.collect()
}

pub fn avatar_color(id: i64) -> &'static str {
	AVATAR_COLORS[id.rem_euclid(AVATAR_COLORS.len() as i64) as usize]
}

/// Formats the first run of 10 or 11 digits as `1 (555) 123-4567`.
/// Numbers written with separators are left as they are.
pub fn format_phone(phone: &str) -> String {
	PHONE.replace(phone, "$1 ($2) $3-$4").into_owned()
}

pub fn post_card(post: &Post) -> String {
	let author = post.author.as_deref().unwrap_or(UNKNOWN_AUTHOR);

	format!(
		r#"<article class="bg-white rounded-lg shadow-md p-6 border border-gray-100" data-post-id="{id}"><div class="flex items-center justify-between mb-3"><span class="text-sm font-medium text-rose-600">{author}</span><time class="text-xs text-gray-400" datetime="{datetime}">{date}</time></div><h3 class="text-lg font-semibold text-gray-800 mb-2">{title}</h3><p class="text-gray-600 text-sm leading-relaxed">{content}</p><div class="mt-4 text-xs text-gray-400">Post #{id} &middot; User #{user_id}</div></article>"#,
		id = post.id,
		user_id = post.user_id,
		author = escape(author),
		datetime = post.created_at.to_rfc3339(),
		date = post.created_at.format("%b %-d, %Y"),
		title = escape(&post.title),
		content = escape(&post.content),
	)
}

pub fn user_card(user: &User) -> String {
	let address = &user.address;
	let company = &user.company;

	format!(
		r#"<article class="bg-white rounded-xl shadow-lg border border-gray-100 overflow-hidden" data-user-id="{id}"><div class="bg-gradient-to-r from-rose-500 to-rose-600 p-6 flex items-center space-x-4"><div class="w-16 h-16 rounded-full flex items-center justify-center text-white text-xl font-bold {color}">{initials}</div><div class="text-white"><h3 class="text-xl font-semibold">{name}</h3><p class="text-rose-100">@{username}</p></div></div><div class="p-6 space-y-3 text-gray-600 text-sm"><p><a href="mailto:{email}" class="hover:text-rose-600">{email}</a></p><p>{phone}</p><p><a href="https://{website}" class="hover:text-rose-600" target="_blank" rel="noopener noreferrer">{website}</a></p><p>{street}, {suite}<br />{city} {zipcode}</p><div class="border-t border-gray-100 pt-3"><p class="font-semibold text-gray-800">{company}</p><p class="italic">&ldquo;{catch_phrase}&rdquo;</p><p class="text-xs text-gray-400">{bs}</p></div></div></article>"#,
		id = user.id,
		color = avatar_color(user.id),
		initials = escape(&initials(&user.name)),
		name = escape(&user.name),
		username = escape(&user.username),
		email = escape(&user.email),
		phone = escape(&format_phone(&user.phone)),
		website = escape(&user.website),
		street = escape(&address.street),
		suite = escape(&address.suite),
		city = escape(&address.city),
		zipcode = escape(&address.zipcode),
		company = escape(&company.name),
		catch_phrase = escape(&company.catch_phrase),
		bs = escape(&company.bs),
	)
}

#[cfg(test)]
mod test {
	use chrono::{TimeZone, Utc};

	use super::*;
	use crate::feed::fallback;

	#[test]
	fn test_initials() {
		assert_eq!(initials("Leanne Graham"), "LG");
		assert_eq!(initials("Mrs. Dennis Schulist"), "MD");
		assert_eq!(initials("ada"), "A");
		assert_eq!(initials("  spaced   out "), "SO");
		assert_eq!(initials(""), "");
	}

	#[test]
	fn test_avatar_color() {
		assert_eq!(avatar_color(1), "bg-blue-500");
		assert_eq!(avatar_color(8), "bg-rose-500");
		assert_eq!(avatar_color(-1), "bg-cyan-500");
	}

	#[test]
	fn test_format_phone() {
		assert_eq!(format_phone("15551234567"), "1 (555) 123-4567");
		assert_eq!(format_phone("5551234567"), " (555) 123-4567");
		assert_eq!(format_phone("1-770-736-8031 x56442"), "1-770-736-8031 x56442");
		assert_eq!(format_phone("1-555-0123"), "1-555-0123");
	}

	#[test]
	fn test_post_card_unknown_author() {
		let post = Post {
			id: 3,
			title: "<b>Hi</b>".into(),
			content: "Body".into(),
			user_id: 99,
			author: None,
			created_at: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap(),
		};
		let html = post_card(&post);

		assert!(html.contains(UNKNOWN_AUTHOR));
		assert!(html.contains("&lt;b&gt;Hi&lt;/b&gt;"));
		assert!(html.contains("Mar 5, 2024"));
		assert!(html.contains("User #99"));
	}

	#[test]
	fn test_user_card() {
		let html = user_card(&fallback::users()[1]);

		assert!(html.contains("Sarah Host"));
		assert!(html.contains("@sarahh"));
		assert!(html.contains(">SH<"));
		assert!(html.contains("bg-green-500"));
		assert!(html.contains("Cozy Homes LLC"));
	}
}
