//! Request tokens for last-write-wins commits.
//!
//! Every fetch an orchestrator starts is tagged with a [`RequestToken`]. When
//! the response arrives the orchestrator asks its [`TokenCounter`] whether the
//! token is still current; a superseded token means the result is discarded
//! without touching state. Nothing is cancelled at the transport level.

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw sequence value, useful in log fields.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic source of [`RequestToken`]s.
///
/// The counter is not synchronised; owners keep it behind the same lock as
/// the state it guards so issuing and checking happen atomically with the
/// state transition.
///
/// # Example
///
/// ```
/// use repo_explorer::freshness::TokenCounter;
///
/// let mut counter = TokenCounter::default();
/// let first = counter.issue();
/// let second = counter.issue();
/// assert!(!counter.is_current(first));
/// assert!(counter.is_current(second));
///
/// counter.invalidate();
/// assert!(!counter.is_current(second));
/// ```
#[derive(Debug, Default)]
pub struct TokenCounter {
    current: u64,
}

impl TokenCounter {
    /// Issues a new token, superseding every token issued before it.
    pub const fn issue(&mut self) -> RequestToken {
        self.current = self.current.wrapping_add(1);
        RequestToken(self.current)
    }

    /// Returns true when `token` is the most recently issued token.
    #[must_use]
    pub const fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.current
    }

    /// Supersedes all outstanding tokens without issuing a new one.
    pub const fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
    }
}
