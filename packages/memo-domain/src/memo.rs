use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A parsed memo command, ready to be handed to an annotation store.
///
/// `timestamp` is always UTC. Every entry of `tags` is a message token that contained a colon,
/// kept byte for byte; none of them appear in `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
	#[serde(with = "crate::time_serde")]
	pub timestamp: OffsetDateTime,
	pub description: String,
	pub tags: Vec<String>,
}
