use std::fmt;

/// Key of an object inside the blob store container. An empty location means
/// the artifact has not been produced yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StorageLocation(String);

impl StorageLocation {
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
