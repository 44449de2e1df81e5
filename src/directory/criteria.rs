use crate::repository::{Error, Status};

/// What the user typed and which status chip is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryCriteria {
    /// Matched as a case-insensitive substring, untrimmed.
    pub search_text: String,
    pub status_filter: Option<Status>,
}

impl QueryCriteria {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status_filter = Some(status);
        self
    }

    /// Sets the filter from a status label as shown on screen.
    ///
    /// An empty label or "All" clears the filter. Any other label must be an
    /// exact [`Status`] name, otherwise [`Error::InvalidCriteria`] is returned.
    pub fn with_status_name(mut self, label: &str) -> Result<Self, Error> {
        self.status_filter = match label {
            "" | "All" => None,
            label => Some(label.parse()?),
        };
        Ok(self)
    }

    pub(crate) fn matches_status(&self, status: Status) -> bool {
        self.status_filter.is_none_or(|filter| filter == status)
    }
}
