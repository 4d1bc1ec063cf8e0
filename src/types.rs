use std::fmt;

use serde::{Deserialize, Serialize};

/// Pre-parsed view of a site or resource URI.
///
/// Only the two components the engine looks at are kept. Callers are
/// responsible for parsing; no normalization (case folding, IDN) is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uri<'a> {
    /// URI scheme without the trailing `:` (e.g. `https`, `data`)
    pub scheme: &'a str,
    /// Host component, empty when the URI has none
    pub host: &'a str,
}

impl<'a> Uri<'a> {
    /// Create a new Uri from scheme and host
    pub fn new(scheme: &'a str, host: &'a str) -> Self {
        Self { scheme, host }
    }

    /// Shorthand for an `https` URI
    pub fn https(host: &'a str) -> Self {
        Self::new("https", host)
    }

    /// True if the URI has no host
    pub fn has_empty_host(&self) -> bool {
        self.host.is_empty()
    }
}

/// Blocklist category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Advertising,
    Analytics,
    Social,
    Content,
}

impl Category {
    /// All categories, in evaluation order.
    pub const ALL: [Category; 4] = [
        Category::Advertising,
        Category::Analytics,
        Category::Social,
        Category::Content,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Advertising => "advertising",
            Category::Analytics => "analytics",
            Category::Social => "social",
            Category::Content => "content",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
