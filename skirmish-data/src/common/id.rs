use std::{
    fmt,
    fmt::Display,
};

use serde::{
    Deserialize,
    Serialize,
};

/// An ID for a resource.
///
/// IDs are normalized names: only ASCII letters and digits are kept, and letters are lowercased.
/// For example, "Mr. Mime" and "mr-mime" both map to `mrmime`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Id(String);

impl Id {
    /// Checks if the ID is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn normalize_id(value: &str) -> Id {
    Id(value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect())
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        normalize_id(&value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        normalize_id(value)
    }
}

impl From<Id> for String {
    fn from(value: Id) -> Self {
        value.0
    }
}
