pub mod adapter;
pub mod kind;
pub mod matching;
pub mod principal;
pub mod query;
pub mod result;
pub mod visibility;

pub use adapter::{AdapterError, AdapterPage, AdapterResult, BoxFuture, Candidate, ResourceAdapter};
pub use kind::ResourceKind;
pub use principal::Principal;
pub use query::{
	DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT, NormalizedQuery, SearchRequest, normalize,
};
pub use result::{FacetCount, SearchResponse, SearchResult, cmp_results, cmp_score_desc};
pub use visibility::{Open, OwnerOnly, VisibilityPolicy};
