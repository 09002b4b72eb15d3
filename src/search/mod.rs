//! Repository search session.
//!
//! [`SearchStore`] moves a session through the [`SearchStatus`] phases:
//!
//! - `Idle` to `Loading` when a non-blank search starts,
//! - `Loading` to `Loaded` when the latest search succeeds,
//! - `Loading` to `Failed` when it fails, which resets the session,
//! - anything to `Idle` on [`SearchStore::clear_search`].
//!
//! Every search carries a request token, and only the most recently issued
//! search may commit. [`SearchLocation`] mirrors the committed query and page
//! as a shareable query string.

mod location;
mod state;
mod store;

pub use location::SearchLocation;
pub use state::{SearchState, SearchStatus};
pub use store::SearchStore;
