use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::DomainError;

const ARTWORK_EXTENSION: &str = "png";

/// Name of a Pokémon species as the catalog reports it (e.g. `mr-mime`).
///
/// Names double as cache file stems and URL path segments, so they are
/// lowercased and limited to ASCII letters, digits and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpeciesName(String);

impl SpeciesName {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let normalized = value.trim().to_ascii_lowercase();
        let allowed = |ch: char| ch.is_ascii_alphanumeric() || ch == '-';
        if normalized.is_empty() || !normalized.chars().all(allowed) {
            return Err(DomainError::InvalidSpeciesName(value));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn artwork_file_name(&self) -> String {
        format!("{}.{ARTWORK_EXTENSION}", self.0)
    }
}

impl Display for SpeciesName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SpeciesName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpeciesName> for String {
    fn from(value: SpeciesName) -> Self {
        value.0
    }
}
