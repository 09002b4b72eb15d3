//! One independently failing fetch concern of the detail view.

/// Value, progress and failure of one fetch lane.
///
/// A lane only ever blanks its own value on failure; other lanes are left
/// alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane<T> {
    /// Last committed value.
    pub value: Option<T>,
    /// A fetch is in flight.
    pub loading: bool,
    /// Message of the latest failure.
    pub error: Option<String>,
}

impl<T> Lane<T> {
    /// Marks a fetch as started. The previous value stays visible.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Commits a fetched value.
    pub fn succeed(&mut self, value: T) {
        self.value = Some(value);
        self.loading = false;
        self.error = None;
    }

    /// Commits a failure, dropping the lane's value.
    pub fn fail(&mut self, message: String) {
        self.value = None;
        self.loading = false;
        self.error = Some(message);
    }

    /// Borrow the committed value.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> Default for Lane<T> {
    fn default() -> Self {
        Self {
            value: None,
            loading: false,
            error: None,
        }
    }
}
