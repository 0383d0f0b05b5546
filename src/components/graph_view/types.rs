use serde::Deserialize;

use crate::error::GraphLoadError;

/// A node id or category; the document may use strings or numbers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawKey")]
pub struct Key(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
	Text(String),
	Integer(i64),
	Number(f64),
	Flag(bool),
}

impl From<RawKey> for Key {
	fn from(raw: RawKey) -> Self {
		Key(match raw {
			RawKey::Text(s) => s,
			RawKey::Integer(i) => i.to_string(),
			RawKey::Number(n) => n.to_string(),
			RawKey::Flag(b) => b.to_string(),
		})
	}
}

impl From<&str> for Key {
	fn from(s: &str) -> Self {
		Key(s.to_owned())
	}
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphNode {
	pub id: Key,
	#[serde(default)]
	pub user: Option<Key>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphLink {
	pub source: Key,
	pub target: Key,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	#[serde(default)]
	pub nodes: Vec<GraphNode>,
	#[serde(default)]
	pub links: Vec<GraphLink>,
}

impl GraphData {
	pub fn from_json(text: &str) -> Result<Self, GraphLoadError> {
		Ok(serde_json::from_str(text)?)
	}
}
