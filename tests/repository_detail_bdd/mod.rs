//! Support modules for the repository detail behaviour tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use runtime::mount;
pub(crate) use state::{DetailScenarioState, open_repository};
