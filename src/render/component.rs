//! Reusable building blocks. Each style option is a fixed
//! enumeration mapped onto a class string.

use super::escape;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Size {
	Small,
	#[default]
	Medium,
	Large,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
	#[default]
	Primary,
	Secondary,
	Outline,
	Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shape {
	RoundedSm,
	#[default]
	RoundedMd,
	RoundedFull,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
	#[default]
	Default,
	Outlined,
	Elevated,
}

impl Size {
	fn button(self) -> &'static str {
		match self {
			Self::Small => "px-3 py-2 text-sm",
			Self::Medium => "px-6 py-3 text-base",
			Self::Large => "px-8 py-4 text-lg",
		}
	}

	fn card(self) -> &'static str {
		match self {
			Self::Small => "p-3 max-w-sm",
			Self::Medium => "p-6 max-w-md",
			Self::Large => "p-8 max-w-lg",
		}
	}

	fn card_title(self) -> &'static str {
		match self {
			Self::Small => "text-lg font-semibold",
			Self::Medium => "text-xl font-semibold",
			Self::Large => "text-2xl font-bold",
		}
	}

	fn card_content(self) -> &'static str {
		match self {
			Self::Small => "text-sm",
			Self::Medium => "text-base",
			Self::Large => "text-lg",
		}
	}
}

impl ButtonVariant {
	fn class(self) -> &'static str {
		match self {
			Self::Primary => "bg-rose-500 text-white hover:bg-rose-600 focus:ring-rose-500",
			Self::Secondary => "bg-gray-500 text-white hover:bg-gray-600 focus:ring-gray-500",
			Self::Outline => {
				"border-2 border-rose-500 text-rose-500 bg-transparent hover:bg-rose-50 focus:ring-rose-500"
			}
			Self::Ghost => "text-rose-500 bg-transparent hover:bg-rose-50 focus:ring-rose-500",
		}
	}
}

impl Shape {
	fn class(self) -> &'static str {
		match self {
			Self::RoundedSm => "rounded-sm",
			Self::RoundedMd => "rounded-md",
			Self::RoundedFull => "rounded-full",
		}
	}

	fn focus_offset(self) -> &'static str {
		match self {
			Self::RoundedSm => "focus:ring-offset-1",
			Self::RoundedMd | Self::RoundedFull => "focus:ring-offset-2",
		}
	}
}

impl CardVariant {
	fn class(self) -> &'static str {
		match self {
			Self::Default => "bg-white border border-gray-200 hover:border-gray-300",
			Self::Outlined => "border-2 border-gray-300 bg-transparent hover:border-gray-400",
			Self::Elevated => "bg-white shadow-md hover:shadow-lg",
		}
	}
}

/// A button, or a link styled as one when `href` is set.
#[derive(Clone, Debug, Default)]
pub struct Button<'a> {
	pub label: &'a str,
	pub href: Option<&'a str>,
	pub size: Size,
	pub shape: Shape,
	pub variant: ButtonVariant,
	pub disabled: bool,
}

impl<'a> Button<'a> {
	pub fn new(label: &'a str) -> Self {
		Self {
			label,
			..Default::default()
		}
	}

	pub fn link(label: &'a str, href: &'a str) -> Self {
		Self {
			label,
			href: Some(href),
			..Default::default()
		}
	}

	pub fn classes(&self) -> String {
		[
			"font-medium transition-all duration-200 focus:outline-none focus:ring-2 disabled:opacity-50 disabled:cursor-not-allowed",
			self.size.button(),
			self.shape.class(),
			self.variant.class(),
			self.shape.focus_offset(),
		]
		.join(" ")
	}

	pub fn render(&self) -> String {
		let label = escape(self.label);
		let classes = self.classes();

		match self.href {
			Some(href) => format!(
				r#"<a href="{href}" class="{classes} inline-block">{label}</a>"#,
				href = escape(href),
			),
			None => format!(
				r#"<button type="button" class="{classes}"{disabled}>{label}</button>"#,
				disabled = if self.disabled { " disabled" } else { "" },
			),
		}
	}
}

/// A titled block of text.
#[derive(Clone, Debug, Default)]
pub struct Card<'a> {
	pub title: &'a str,
	pub content: &'a str,
	pub variant: CardVariant,
	pub size: Size,
}

impl<'a> Card<'a> {
	pub fn new(title: &'a str, content: &'a str) -> Self {
		Self {
			title,
			content,
			..Default::default()
		}
	}

	pub fn render(&self) -> String {
		format!(
			r#"<article class="rounded-lg transition-all duration-200 {variant} {size}"><h3 class="{title_size} text-gray-800 mb-3">{title}</h3><p class="{content_size} text-gray-600 leading-relaxed">{content}</p></article>"#,
			variant = self.variant.class(),
			size = self.size.card(),
			title_size = self.size.card_title(),
			content_size = self.size.card_content(),
			title = escape(self.title),
			content = escape(self.content),
		)
	}
}

const NAV: [(&str, &str); 4] = [
	("/", "Home"),
	("/about", "About"),
	("/posts", "Posts"),
	("/users", "Users"),
];

/// The site header, highlighting the link for `active`.
pub fn header(active: &str) -> String {
	let links = NAV
		.iter()
		.map(|&(href, label)| {
			let class = if href == active {
				"text-rose-600 font-semibold"
			} else {
				"text-gray-600 hover:text-rose-600"
			};

			format!(r#"<a href="{href}" class="{class}">{label}</a>"#)
		})
		.collect::<String>();

	format!(
		r#"<header class="bg-white shadow-sm"><nav class="container mx-auto px-4 py-4 flex justify-between items-center"><a href="/" class="text-2xl font-bold text-rose-500">airbnb</a><div class="flex space-x-6">{links}</div></nav></header>"#
	)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_button_classes() {
		let button = Button {
			size: Size::Small,
			shape: Shape::RoundedSm,
			variant: ButtonVariant::Outline,
			..Button::new("Go")
		};
		let classes = button.classes();

		assert!(classes.contains("px-3 py-2 text-sm"));
		assert!(classes.contains("rounded-sm"));
		assert!(classes.contains("border-2 border-rose-500"));
		assert!(classes.ends_with("focus:ring-offset-1"));
	}

	#[test]
	fn test_disabled_button() {
		let html = Button {
			disabled: true,
			..Button::new("Nope")
		}
		.render();

		assert!(html.starts_with("<button"));
		assert!(html.contains(" disabled>Nope</button>"));
	}

	#[test]
	fn test_link_button_escapes() {
		let html = Button::link("Try <again>", "/posts?refresh=true&x=1").render();

		assert!(html.contains(r#"href="/posts?refresh=true&amp;x=1""#));
		assert!(html.contains("Try &lt;again&gt;"));
	}

	#[test]
	fn test_card_sizes() {
		let html = Card {
			variant: CardVariant::Elevated,
			size: Size::Large,
			..Card::new("Title", "Body")
		}
		.render();

		assert!(html.contains("shadow-md"));
		assert!(html.contains("p-8 max-w-lg"));
		assert!(html.contains(r#"<h3 class="text-2xl font-bold"#));
	}

	#[test]
	fn test_header_marks_active_link() {
		let html = header("/users");

		assert!(html.contains(r#"<a href="/users" class="text-rose-600 font-semibold">Users</a>"#));
		assert!(html.contains(r#"<a href="/posts" class="text-gray-600 hover:text-rose-600">Posts</a>"#));
	}
}
