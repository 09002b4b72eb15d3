//! CLI operation mode handlers.
//!
//! - [`search`]: One page of repository search results
//! - [`repository`]: One repository with a page of its issues
//!
//! Output formatting utilities are in [`output`].

pub mod output;
pub mod repository;
pub mod search;

#[cfg(test)]
pub mod test_utils;

/// Whether the requested page could be shown without errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything loaded.
    Shown,
    /// At least one part failed; its message was written out.
    Failed,
}
