//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: Token, query, repository and typed field tests
//! - `loading`: End-to-end loading from environment and CLI arguments

mod helpers;
mod precedence;
