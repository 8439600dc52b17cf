use serde::{Deserialize, Serialize};

/// Ordering applied when listing comments.
///
/// Both orderings compare lowercased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentSort {
    /// Category descending, then comment text ascending. Groups comments by
    /// category and keeps each group alphabetical.
    CategoryDescCommentAsc,
    /// Category descending only.
    CategoryDesc,
}

#[derive(Debug, Default, Deserialize)]
/// Query string accepted by the comment list endpoints.
/// When `sort` is absent the route's own default ordering applies.
pub struct ListCommentsParams {
    pub sort: Option<CommentSort>,
}
