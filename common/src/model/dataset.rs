use serde::{Deserialize, Serialize};

/// A named collection of imported comments.
///
/// Soft-deleted datasets are never listed, so the `deleted` flag stays in the
/// store and is not part of the wire model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: i64,
    pub name: String,
}
