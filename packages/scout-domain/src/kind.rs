/// The closed set of searchable resource kinds.
///
/// Variants are declared in the lexical order of their wire tags; the derived
/// `Ord` is the tie-break order used when merging federated results.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
	Agent,
	Artifact,
	Log,
	Run,
}

impl ResourceKind {
	pub const ALL: [Self; 4] = [Self::Agent, Self::Artifact, Self::Log, Self::Run];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Agent => "agent",
			Self::Artifact => "artifact",
			Self::Log => "log",
			Self::Run => "run",
		}
	}

	/// Parses a caller-supplied type tag. Unknown tags yield `None` and are
	/// dropped silently during normalization.
	pub fn from_tag(tag: &str) -> Option<Self> {
		match tag {
			"agent" => Some(Self::Agent),
			"artifact" => Some(Self::Artifact),
			"log" => Some(Self::Log),
			"run" => Some(Self::Run),
			_ => None,
		}
	}
}

impl std::fmt::Display for ResourceKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
