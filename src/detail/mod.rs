//! Repository detail view: metadata, one page of issues, and issue counts.
//!
//! The view owns three [`Lane`]s that load and fail independently. Its
//! pagination total is derived from the statistics lane, because the issue
//! listing never reports one.

mod lane;
mod orchestrator;
mod state;

pub use lane::Lane;
pub use orchestrator::RepositoryDetail;
pub use state::{DetailState, IssueFilterState};
