//! Reference matching policy: case-insensitive substring match against a
//! resource's title and description. Adapters may substitute any ranking or
//! indexing technology as long as the `(candidates, raw_count)` contract of
//! [`crate::ResourceAdapter`] holds.

const SCORE_TITLE_EXACT: f32 = 1.0;
const SCORE_TITLE_PREFIX: f32 = 0.9;
const SCORE_TITLE_SUBSTRING: f32 = 0.75;
const SCORE_DESCRIPTION_SUBSTRING: f32 = 0.5;

/// Scores `query` against a title and optional description. Returns `None`
/// when neither field matches. `query` is expected to be trimmed and
/// non-empty; an empty query is short-circuited before matching ever runs.
pub fn match_score(query: &str, title: &str, description: Option<&str>) -> Option<f32> {
	let needle = query.to_lowercase();
	let title = title.to_lowercase();

	if title == needle {
		return Some(SCORE_TITLE_EXACT);
	}
	if title.starts_with(&needle) {
		return Some(SCORE_TITLE_PREFIX);
	}
	if title.contains(&needle) {
		return Some(SCORE_TITLE_SUBSTRING);
	}
	if description.map(|text| text.to_lowercase().contains(&needle)).unwrap_or(false) {
		return Some(SCORE_DESCRIPTION_SUBSTRING);
	}

	None
}
