use super::Store;
use crate::error::StoreError;
use common::model::dataset::Dataset;
use log::info;
use rusqlite::params;

impl Store {
    /// Creates a dataset and one empty-category comment per value.
    ///
    /// The dataset row and all comment rows are written in a single transaction:
    /// either the whole import lands or nothing does.
    pub fn create_dataset(&self, name: &str, values: &[String]) -> Result<i64, StoreError> {
        let mut conn = self.connection()?;
        let tx = conn.transaction()?;

        tx.execute("INSERT INTO datasets (name) VALUES (?1)", params![name])?;
        let dataset_id = tx.last_insert_rowid();
        {
            let mut insert = tx.prepare(
                "INSERT INTO comments (dataset_id, comment, category) VALUES (?1, ?2, '')",
            )?;
            for value in values {
                insert.execute(params![dataset_id, value])?;
            }
        }

        tx.commit()?;
        info!(
            "Imported dataset {} '{}' with {} comment(s)",
            dataset_id,
            name,
            values.len()
        );
        Ok(dataset_id)
    }

    /// Datasets that have not been deleted, newest first.
    pub fn list_datasets(&self) -> Result<Vec<Dataset>, StoreError> {
        let conn = self.connection()?;
        let mut stmt =
            conn.prepare("SELECT id, name FROM datasets WHERE NOT deleted ORDER BY id DESC")?;
        let datasets = stmt
            .query_map([], |row| {
                Ok(Dataset {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(datasets)
    }

    /// Flags a dataset as deleted. Its comments stay in place.
    pub fn delete_dataset(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.connection()?;
        conn.execute("UPDATE datasets SET deleted = TRUE WHERE id = ?1", params![id])?;
        Ok(())
    }
}
