use std::error::Error;
use std::fmt::{self, Display, Formatter};

pub mod banner;
pub mod selector;

/// Failure on the way to or from the signup endpoint. The description is for
/// the console only; users get a fixed retry message instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub description: String,
}

impl FetchError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.description.fmt(f)
    }
}

impl Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self {
            description: value.to_string(),
        }
    }
}
