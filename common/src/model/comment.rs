use serde::{Deserialize, Serialize};

/// A single free-text comment and the category label assigned to it.
///
/// The same shape travels in both directions: list endpoints return it, and the
/// update and split endpoints accept it as their JSON body. `id` is the SQLite
/// `rowid` of the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub comment: String,
    pub category: String,
}
