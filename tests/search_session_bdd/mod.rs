//! Support modules for the search session behaviour tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use runtime::mount;
pub(crate) use state::{SearchSessionState, received_request_count, run_search};
