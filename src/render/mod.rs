//! Server-side HTML rendering.
//!
//! Every function here is a pure projection from records to markup.

use std::time::Duration;

pub mod card;
pub mod component;
pub mod page;

/// Escapes text for use in HTML content and quoted attributes.
pub fn escape(input: &str) -> String {
	let mut output = String::with_capacity(input.len());

	for c in input.chars() {
		match c {
			'&' => output.push_str("&amp;"),
			'<' => output.push_str("&lt;"),
			'>' => output.push_str("&gt;"),
			'"' => output.push_str("&quot;"),
			'\'' => output.push_str("&#39;"),
			c => output.push(c),
		}
	}

	output
}

/// The `Cache-Control` value telling shared caches to keep
/// a page until its data is fetched again.
pub fn cache_control(left: Duration) -> String {
	format!("public, s-maxage={}", left.as_secs())
}

/// Wraps a page body in the document shell.
pub fn document(title: &str, description: &str, active: &str, body: &str) -> String {
	format!(
		r#"<!DOCTYPE html>
<html lang="en">
	<head>
		<meta charset="utf-8" />
		<meta name="viewport" content="width=device-width, initial-scale=1" />
		<title>{title}</title>
		<meta name="description" content="{description}" />
		<script src="https://cdn.tailwindcss.com"></script>
	</head>
	<body class="min-h-screen bg-gray-50">
		{header}
		<main class="container mx-auto px-4 py-8">{body}</main>
	</body>
</html>"#,
		title = escape(title),
		description = escape(description),
		header = component::header(active),
	)
}

#[cfg(test)]
mod test {
	use std::time::Duration;

	#[test]
	fn test_escape() {
		assert_eq!(
			super::escape(r#"<a href="x">Tom & Jerry's</a>"#),
			"&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
		);
		assert_eq!(super::escape("plain"), "plain");
	}

	#[test]
	fn test_cache_control() {
		assert_eq!(
			super::cache_control(Duration::from_millis(600_900)),
			"public, s-maxage=600"
		);
	}
}
