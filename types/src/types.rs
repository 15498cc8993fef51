use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All activities keyed by their display name, e.g. `"Chess Club"`.
pub type Activities = BTreeMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,

    pub schedule: String,

    pub max_participants: usize,

    /// Email addresses of the registered participants.
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}
