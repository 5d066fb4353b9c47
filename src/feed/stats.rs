use std::collections::HashSet;

use crate::upstream::User;

/// Headline numbers shown under the user directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommunityStats {
	pub total: usize,
	/// Users whose company name marks them as a business ("Group" or "LLC").
	pub business_hosts: usize,
	/// Users with a `.net` email address.
	pub active_members: usize,
	/// Distinct cities across all addresses.
	pub cities: usize,
}

fn is_business(user: &User) -> bool {
	let name = &user.company.name;

	name.contains("Group") || name.contains("LLC")
}

pub fn community_stats(users: &[User]) -> CommunityStats {
	CommunityStats {
		total: users.len(),
		business_hosts: users.iter().filter(|user| is_business(user)).count(),
		active_members: users
			.iter()
			.filter(|user| user.email.contains(".net"))
			.count(),
		cities: users
			.iter()
			.map(|user| user.address.city.as_str())
			.collect::<HashSet<_>>()
			.len(),
	}
}
