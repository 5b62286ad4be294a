//! MP record type

use serde::{Deserialize, Serialize};

/// A nominated Member of Parliament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mp {
    /// Unique record id
    pub id: u32,
    /// Full name
    pub name: String,
    /// Constituency or seat name
    pub constituency: String,
    /// Party code (NRM, NUP, IND, FDC, ...)
    pub party: String,
}

impl Mp {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        constituency: impl Into<String>,
        party: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            constituency: constituency.into(),
            party: party.into(),
        }
    }

    /// Normalized name + constituency, used to detect duplicate entries
    /// that were given different ids
    pub fn identity_key(&self) -> (String, String) {
        (normalize(&self.name), normalize(&self.constituency))
    }
}

fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
