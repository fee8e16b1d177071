use mongodb::{bson::Document, IndexModel};

use crate::db::Database;
use crate::errors::{OperationError, Result};
use crate::queries;

impl Database {
    /// Creates an index on `keys` and returns its name.
    /// The server treats an identical existing index as a no-op.
    pub async fn create_index(&self, keys: Document) -> Result<String> {
        let described = keys.to_string();
        let model = IndexModel::builder().keys(keys).build();

        let result = self
            .books()
            .create_index(model)
            .await
            .map_err(|source| OperationError::Index {
                keys: described,
                source,
            })?;

        Ok(result.index_name)
    }

    pub async fn create_title_index(&self) -> Result<String> {
        self.create_index(queries::title_index_keys()).await
    }

    pub async fn create_author_year_index(&self) -> Result<String> {
        self.create_index(queries::author_year_index_keys()).await
    }

    pub async fn list_index_names(&self) -> Result<Vec<String>> {
        self.books()
            .list_index_names()
            .await
            .map_err(OperationError::query("list_index_names"))
    }
}
