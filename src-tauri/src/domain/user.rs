//! User Entity

use serde::{Deserialize, Serialize};

/// An authenticated account. The password hash never leaves the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Unix milliseconds
    pub created_at: Option<i64>,
}
