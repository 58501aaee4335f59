use serde::{Deserialize, Serialize};

/// An administrative region record.
///
/// `code` is the lookup key and is unique across the collection; uniqueness is
/// enforced by the store, not by this type. `parent_code` refers to another
/// locality's `code` but is never checked to exist or to be acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locality {
    pub code: i64,
    pub statistical_code: i64,
    pub name: String,
    /// Status enum; the values are defined outside this service.
    pub status: i64,
    pub parent_code: i64,
}

impl Locality {
    /// Creates a locality with the given code and name. Other fields are zero.
    pub fn new(code: i64, name: impl Into<String>) -> Self {
        Self {
            code,
            statistical_code: 0,
            name: name.into(),
            status: 0,
            parent_code: 0,
        }
    }

    pub fn with_statistical_code(mut self, statistical_code: i64) -> Self {
        self.statistical_code = statistical_code;
        self
    }

    pub fn with_status(mut self, status: i64) -> Self {
        self.status = status;
        self
    }

    pub fn with_parent_code(mut self, parent_code: i64) -> Self {
        self.parent_code = parent_code;
        self
    }
}
