/// A set of mutually exclusive options, at most one selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionGroup {
	members: Vec<String>,
	selected: Option<usize>,
}

impl OptionGroup {
	pub fn new(members: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			members: members.into_iter().map(Into::into).collect(),
			selected: None,
		}
	}

	/// Makes `id` the only selected member.
	///
	/// Returns `false` when `id` is not a member or is already selected; the
	/// selection is unchanged in both cases.
	pub fn select(&mut self, id: &str) -> bool {
		let Some(index) = self.members.iter().position(|m| m == id) else {
			return false;
		};
		if self.selected == Some(index) {
			return false;
		}
		self.selected = Some(index);
		true
	}

	/// Applies a stored choice, or `fallback` when it is not a member.
	///
	/// Does nothing and returns `false` once anything is selected, so a late
	/// restore never replaces a choice the user already made.
	pub fn restore(&mut self, id: &str, fallback: &str) -> bool {
		if self.selected.is_some() {
			return false;
		}
		let _ = self.select(id) || self.select(fallback);
		true
	}

	pub fn selected(&self) -> Option<&str> {
		self.selected.map(|i| self.members[i].as_str())
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.selected() == Some(id)
	}

	pub fn members(&self) -> &[String] {
		&self.members
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn themes() -> OptionGroup {
		OptionGroup::new(["Light", "Dark", "Arctic"])
	}

	fn selected_count(group: &OptionGroup) -> usize {
		group.members().iter().filter(|m| group.is_selected(m)).count()
	}

	#[test]
	fn test_starts_without_selection() {
		let group = themes();
		assert_eq!(group.selected(), None);
		assert_eq!(selected_count(&group), 0);
	}

	#[test]
	fn test_second_selection_leaves_exactly_one() {
		let mut group = themes();
		assert!(group.select("Light"));
		assert!(group.select("Arctic"));
		assert_eq!(group.selected(), Some("Arctic"));
		assert_eq!(selected_count(&group), 1);
	}

	#[test]
	fn test_reselecting_keeps_selection() {
		let mut group = themes();
		group.select("Dark");
		assert!(!group.select("Dark"));
		assert_eq!(group.selected(), Some("Dark"));
	}

	#[test]
	fn test_restore_falls_back_for_unknown_id() {
		let mut group = themes();
		assert!(group.restore("Sepia", "Light"));
		assert_eq!(group.selected(), Some("Light"));
	}

	#[test]
	fn test_restore_after_user_choice_is_ignored() {
		let mut group = themes();
		group.select("Arctic");
		assert!(!group.restore("Dark", "Light"));
		assert_eq!(group.selected(), Some("Arctic"));
	}

	#[test]
	fn test_unknown_id_is_ignored() {
		let mut group = themes();
		group.select("Dark");
		assert!(!group.select("Sepia"));
		assert_eq!(group.selected(), Some("Dark"));
	}
}
