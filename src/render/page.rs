use super::{
	card::{post_card, user_card},
	component::{Button, ButtonVariant, Card, CardVariant, Shape, Size},
	document, escape,
};
use crate::{
	feed::{community_stats, Load, Post},
	upstream::User,
};

const CATEGORIES: [(&str, &str, &str); 4] = [
	("Beachfront", "324 properties", "🏖️"),
	("Cabins", "189 properties", "🏡"),
	("Tiny Homes", "142 properties", "🚐"),
	("Luxury", "276 properties", "⭐"),
];

const FEATURED: [(&str, &str); 3] = [
	(
		"Outdoor getaways",
		"Properties with amazing views and nature access",
	),
	(
		"Unique stays",
		"Spaces that are more than just a place to sleep",
	),
	(
		"Entire homes",
		"Comfortable private places with room for friends",
	),
];

fn grid<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
	let cards = items.iter().map(render).collect::<String>();

	format!(r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-12">{cards}</div>"#)
}

/// The warning shown above fallback records, with a link that forces a reload.
fn fallback_banner(error: &str, retry: &str) -> String {
	format!(
		r#"<div class="text-center py-12" role="alert"><h3 class="text-xl font-semibold text-gray-600 mb-2">Using Static Fallback Data</h3><p class="text-gray-500 mb-4">{error}</p>{button}</div>"#,
		error = escape(error),
		button = Button::link("Try Again", retry).render(),
	)
}

fn empty_state(title: &str, hint: &str) -> String {
	format!(
		r#"<div class="text-center py-12"><h3 class="text-xl font-semibold text-gray-600 mb-2">{title}</h3><p class="text-gray-500">{hint}</p></div>"#
	)
}

/// Where the posts come from, with a note when they are the fallback set.
fn source_panel(fallback: bool) -> String {
	let note = if fallback {
		r#"<p class="text-amber-600 text-sm mt-2">Note: Currently showing fallback data due to an API fetch error.</p>"#
	} else {
		""
	};

	format!(
		r#"<div class="bg-white rounded-lg shadow-md p-6 border border-gray-200"><div class="flex items-center justify-between"><div><h3 class="text-lg font-semibold text-gray-800 mb-2">Data from JSONPlaceholder API</h3><p class="text-gray-600 text-sm">These posts are fetched from the API and reused until the revalidation window runs out.</p>{note}</div>{button}</div></div>"#,
		button = Button {
			variant: ButtonVariant::Secondary,
			size: Size::Small,
			..Button::link("View API", "https://jsonplaceholder.typicode.com/")
		}
		.render(),
	)
}

fn community_panel(users: &[User]) -> String {
	let stats = community_stats(users);
	let cells = [
		(stats.total, "text-rose-500", "Total Users"),
		(stats.business_hosts, "text-blue-500", "Business Hosts"),
		(stats.active_members, "text-green-500", "Active Members"),
		(stats.cities, "text-purple-500", "Cities"),
	]
	.into_iter()
	.map(|(value, color, label)| {
		format!(
			r#"<div><div class="text-3xl font-bold {color}">{value}</div><div class="text-gray-600">{label}</div></div>"#
		)
	})
	.collect::<String>();

	format!(
		r#"<div class="mt-12 bg-white rounded-xl shadow-lg p-8" data-community-stats><div class="grid grid-cols-1 md:grid-cols-4 gap-6 text-center">{cells}</div></div>"#
	)
}

/// Shared layout of the two data-backed pages.
fn listing<T>(
	load: &Load<T>,
	heading: &str,
	noun: &str,
	retry: &str,
	render: impl Fn(&T) -> String,
) -> String {
	let items = load.items();
	let mut body = format!(
		r#"<div class="text-center mb-12"><h1 class="text-4xl font-bold text-gray-800 mb-4">{heading}</h1><div class="mt-4 text-sm text-gray-500">Showing {count} {noun}{suffix}</div></div>"#,
		count = items.len(),
		suffix = if load.error().is_some() {
			" (static fallback)"
		} else {
			""
		},
	);

	if let Some(error) = load.error() {
		body.push_str(&fallback_banner(error, retry));
	}

	if items.is_empty() {
		body.push_str(&empty_state(
			&format!("No {noun} available"),
			"Check back later for new travel content.",
		));
	} else {
		body.push_str(&grid(items, render));
	}

	body
}

pub fn posts(load: &Load<Post>) -> String {
	document(
		"Posts - Airbnb Travel Blog",
		"Read the latest travel tips, hosting advice, and destination guides from our community.",
		"/posts",
		&listing(
			load,
			"Travel Blog &amp; Tips",
			"posts",
			"/posts?refresh=true",
			post_card,
		),
	)
}

pub fn users(load: &Load<User>) -> String {
	document(
		"Users - Airbnb Community",
		"Meet the travelers and hosts of our community.",
		"/users",
		&listing(
			load,
			"Our Community",
			"users",
			"/users?refresh=true",
			user_card,
		),
	)
}

pub fn home() -> String {
	let categories = CATEGORIES
		.iter()
		.map(|(name, count, icon)| {
			format!(
				r#"<div class="bg-white rounded-xl shadow-md p-6 text-center"><div class="text-4xl mb-3">{icon}</div><h3 class="font-semibold text-gray-800">{name}</h3><p class="text-sm text-gray-500">{count}</p></div>"#
			)
		})
		.collect::<String>();
	let featured = FEATURED
		.iter()
		.map(|(title, description)| {
			Card {
				variant: CardVariant::Elevated,
				..Card::new(title, description)
			}
			.render()
		})
		.collect::<String>();

	document(
		"Airbnb - Vacation Rentals, Cabins, Beach Houses & More",
		"Find vacation rentals, cabins, beach houses, unique homes and experiences around the world.",
		"/",
		&format!(
			r#"<section class="text-center py-16"><h1 class="text-5xl font-bold text-gray-800 mb-6">Find your next stay</h1><p class="text-xl text-gray-600 mb-8">Search low prices on hotels, homes and much more.</p>{explore}</section><section class="mb-16"><h2 class="text-3xl font-bold text-gray-800 mb-8">Explore by category</h2><div class="grid grid-cols-2 md:grid-cols-4 gap-6">{categories}</div></section><section><h2 class="text-3xl font-bold text-gray-800 mb-8">Featured</h2><div class="grid grid-cols-1 md:grid-cols-3 gap-8">{featured}</div></section>"#,
			explore = Button {
				size: Size::Large,
				shape: Shape::RoundedFull,
				..Button::link("Read the blog", "/posts")
			}
			.render(),
		),
	)
}

/// A showcase of every button and card style.
pub fn about() -> String {
	let sizes = [
		(Size::Small, "Small Button"),
		(Size::Medium, "Medium Button"),
		(Size::Large, "Large Button"),
	];
	let shapes = [
		(Shape::RoundedSm, "Rounded Small"),
		(Shape::RoundedMd, "Rounded Medium"),
		(Shape::RoundedFull, "Rounded Full"),
	];
	let variants = [
		(ButtonVariant::Primary, "Primary"),
		(ButtonVariant::Secondary, "Secondary"),
		(ButtonVariant::Outline, "Outline"),
		(ButtonVariant::Ghost, "Ghost"),
	];

	let buttons = sizes
		.into_iter()
		.map(|(size, label)| Button { size, ..Button::new(label) })
		.chain(
			shapes
				.into_iter()
				.map(|(shape, label)| Button { shape, ..Button::new(label) }),
		)
		.chain(
			variants
				.into_iter()
				.map(|(variant, label)| Button { variant, ..Button::new(label) }),
		)
		.chain([Button {
			disabled: true,
			..Button::new("Disabled Button")
		}])
		.map(|button| button.render())
		.collect::<String>();

	let cards = [
		(CardVariant::Default, Size::Small, "Default", "A plain card with a light border."),
		(CardVariant::Outlined, Size::Medium, "Outlined", "A transparent card with a thicker border."),
		(CardVariant::Elevated, Size::Large, "Elevated", "A card lifted off the page with a shadow."),
	]
	.into_iter()
	.map(|(variant, size, title, content)| {
		Card {
			variant,
			size,
			..Card::new(title, content)
		}
		.render()
	})
	.collect::<String>();

	document(
		"About - Airbnb Clone",
		"The components this site is built from.",
		"/about",
		&format!(
			r#"<h1 class="text-4xl font-bold text-gray-800 mb-8 text-center">About</h1><section class="mb-12"><h2 class="text-3xl font-bold text-gray-800 mb-8 text-center">Button Components</h2><div class="flex flex-wrap gap-4 justify-center">{buttons}</div></section><section><h2 class="text-3xl font-bold text-gray-800 mb-8 text-center">Card Components</h2><div class="grid grid-cols-1 md:grid-cols-3 gap-8">{cards}</div></section>"#
		),
	)
}
