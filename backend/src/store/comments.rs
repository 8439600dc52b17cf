use super::Store;
use crate::error::StoreError;
use common::model::comment::Comment;
use common::requests::CommentSort;
use log::debug;
use rusqlite::{params, OptionalExtension};

/// Parameters of the comment listing query.
///
/// `dataset_id: None` lists comments from every dataset. Rows with empty text
/// are never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentQuery {
    pub dataset_id: Option<i64>,
    pub sort: CommentSort,
}

fn order_by(sort: CommentSort) -> &'static str {
    match sort {
        CommentSort::CategoryDescCommentAsc => "lower(category) DESC, lower(comment) ASC",
        CommentSort::CategoryDesc => "lower(category) DESC",
    }
}

impl Store {
    pub fn list_comments(&self, query: CommentQuery) -> Result<Vec<Comment>, StoreError> {
        let conn = self.connection()?;
        let sql = format!(
            "SELECT rowid, comment, category
             FROM comments
             WHERE comment != ''
             AND (?1 IS NULL OR dataset_id = ?1)
             ORDER BY {}",
            order_by(query.sort)
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![query.dataset_id], |row| {
            Ok(Comment {
                id: row.get(0)?,
                comment: row.get(1)?,
                category: row.get(2)?,
            })
        })?;
        let comments = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(comments)
    }

    /// Distinct categories across all comments, ascending.
    pub fn list_categories(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare("SELECT DISTINCT category FROM comments ORDER BY category")?;
        let categories = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(categories)
    }

    /// Overwrites text and category of one comment. An unknown id changes nothing.
    pub fn update_comment(&self, comment: &Comment) -> Result<(), StoreError> {
        let conn = self.connection()?;
        let changed = conn.execute(
            "UPDATE comments SET comment = ?1, category = ?2 WHERE rowid = ?3",
            params![comment.comment, comment.category, comment.id],
        )?;
        debug!("Updated comment {} ({} row(s))", comment.id, changed);
        Ok(())
    }

    /// Replaces comment `id` with one row per non-blank line of `text`.
    ///
    /// Lines are trimmed and blank lines dropped. New rows take `category` and the
    /// original row's dataset. Delete and inserts share one transaction, so on any
    /// failure the original row is left untouched. Returns the new row ids.
    pub fn split_comment(
        &self,
        id: i64,
        text: &str,
        category: &str,
    ) -> Result<Vec<i64>, StoreError> {
        let mut conn = self.connection()?;
        let tx = conn.transaction()?;

        let dataset_id: Option<i64> = tx
            .query_row(
                "SELECT dataset_id FROM comments WHERE rowid = ?1",
                params![id],
                |row| row.get::<_, Option<i64>>(0),
            )
            .optional()?
            .flatten();

        tx.execute("DELETE FROM comments WHERE rowid = ?1", params![id])?;

        let mut new_ids = Vec::new();
        {
            let mut insert = tx.prepare(
                "INSERT INTO comments (dataset_id, comment, category) VALUES (?1, ?2, ?3)",
            )?;
            for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
                insert.execute(params![dataset_id, line, category])?;
                new_ids.push(tx.last_insert_rowid());
            }
        }

        tx.commit()?;
        Ok(new_ids)
    }

    /// Every comment as `(comment, category)`, in insertion order.
    pub fn export_comments(&self) -> Result<Vec<(String, String)>, StoreError> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare("SELECT comment, category FROM comments ORDER BY rowid")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<(String, String)>, _>>()?;
        Ok(rows)
    }
}
