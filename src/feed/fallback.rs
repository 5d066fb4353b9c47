//! Static records shown when the upstream API cannot be reached.

use chrono::{DateTime, TimeDelta, Utc};

use super::model::Post;
use crate::upstream::model::{Address, Company, Geo, User};

const POSTS: [(&str, &str, &str); 6] = [
	(
		"Welcome to Our Travel Community",
		"Discover amazing places to stay and unique experiences around the world. Join our community of travelers and hosts.",
		"Travel Admin",
	),
	(
		"Best Travel Tips for 2024",
		"Make the most of your travels with these insider tips and recommendations from experienced travelers.",
		"Travel Expert",
	),
	(
		"Hosting Guide for Beginners",
		"Learn how to become a great host and provide exceptional experiences for your guests with our comprehensive guide.",
		"Hosting Pro",
	),
	(
		"Sustainable Travel Practices",
		"How to travel responsibly and minimize your environmental impact while exploring the world.",
		"Eco Traveler",
	),
	(
		"Family-Friendly Destinations",
		"Discover the best destinations and accommodations for memorable family vacations.",
		"Family Travel",
	),
	(
		"Budget Travel Secrets",
		"Smart ways to save money while traveling without compromising on experiences.",
		"Budget Explorer",
	),
];

/// The fallback posts, each one day older than the previous.
pub fn posts(now: DateTime<Utc>) -> Vec<Post> {
	POSTS
		.iter()
		.zip(0..)
		.map(|(&(title, content, author), index)| Post {
			id: index + 1,
			title: title.into(),
			content: content.into(),
			user_id: index + 1,
			author: Some(author.into()),
			created_at: now - TimeDelta::days(index),
		})
		.collect()
}

fn user(
	id: i64,
	(name, username, email, phone, website): (&str, &str, &str, &str, &str),
	(street, suite, city, zipcode): (&str, &str, &str, &str),
	(lat, lng): (&str, &str),
	(company, catch_phrase, bs): (&str, &str, &str),
) -> User {
	User {
		id,
		name: name.into(),
		username: username.into(),
		email: email.into(),
		phone: phone.into(),
		website: website.into(),
		address: Address {
			street: street.into(),
			suite: suite.into(),
			city: city.into(),
			zipcode: zipcode.into(),
			geo: Geo {
				lat: lat.into(),
				lng: lng.into(),
			},
		},
		company: Company {
			name: company.into(),
			catch_phrase: catch_phrase.into(),
			bs: bs.into(),
		},
	}
}

/// The fallback user directory.
pub fn users() -> Vec<User> {
	vec![
		user(
			1,
			(
				"John Traveler",
				"johnt",
				"john.traveler@example.com",
				"1-555-0123",
				"johntravels.com",
			),
			("123 Main St", "Apt 4B", "New York", "10001"),
			("40.7128", "-74.0060"),
			(
				"Travel Enthusiasts Group",
				"Exploring the world one destination at a time",
				"travel experiences",
			),
		),
		user(
			2,
			(
				"Sarah Host",
				"sarahh",
				"sarah.host@example.com",
				"1-555-0124",
				"sarahshome.com",
			),
			("456 Oak Avenue", "Suite 200", "San Francisco", "94102"),
			("37.7749", "-122.4194"),
			(
				"Cozy Homes LLC",
				"Making travelers feel at home",
				"hospitality services",
			),
		),
		user(
			3,
			(
				"Mike Explorer",
				"mikee",
				"mike.explorer@example.com",
				"1-555-0125",
				"mikeadventures.com",
			),
			("789 Beach Blvd", "Unit 5", "Miami", "33101"),
			("25.7617", "-80.1918"),
			(
				"Adventure Seekers Inc",
				"Life is either a daring adventure or nothing",
				"adventure tourism",
			),
		),
	]
}
