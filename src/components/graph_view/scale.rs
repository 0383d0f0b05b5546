use std::collections::HashMap;

/// d3 `schemeCategory10`.
pub const CATEGORY10: [&str; 10] = [
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Ordinal colour scale: categories take colours in first-seen order and
/// wrap around once the palette is exhausted.
#[derive(Clone, Debug)]
pub struct OrdinalScale {
	range: &'static [&'static str],
	domain: HashMap<String, usize>,
}

impl OrdinalScale {
	pub fn new(range: &'static [&'static str]) -> Self {
		Self {
			range,
			domain: HashMap::new(),
		}
	}

	pub fn color(&mut self, category: &str) -> &'static str {
		let next = self.domain.len();
		let slot = *self.domain.entry(category.to_owned()).or_insert(next);
		self.range[slot % self.range.len()]
	}
}

impl Default for OrdinalScale {
	fn default() -> Self {
		Self::new(&CATEGORY10)
	}
}
