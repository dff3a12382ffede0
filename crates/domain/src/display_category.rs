//! Display categories shown by the Alexa app.
//!
//! See <https://developer.amazon.com/docs/device-apis/alexa-discovery.html#display-categories>.

use serde::{Deserialize, Serialize};

/// The display categories used by the bundled entity adapters.
///
/// Users may configure any other category string per entity, which is why
/// discovery documents carry plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayCategory {
    /// A speaker or speaker system.
    Speaker,
    /// A television.
    Tv,
}

impl DisplayCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Speaker => "SPEAKER",
            Self::Tv => "TV",
        }
    }
}

impl std::fmt::Display for DisplayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DisplayCategory> for String {
    fn from(category: DisplayCategory) -> Self {
        category.as_str().to_string()
    }
}
