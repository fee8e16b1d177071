use mongodb::bson::Document;

use crate::db::Database;
use crate::errors::{OperationError, Result};
use crate::queries;

impl Database {
    /// Execution plan and statistics for a title lookup.
    /// The document is returned as-is; nothing depends on its contents.
    pub async fn explain_find_by_title(&self, title: &str) -> Result<Document> {
        let command = queries::explain_find(
            self.collection_name(),
            queries::title_equals(title),
            queries::EXECUTION_STATS,
        );

        self.db
            .run_command(command)
            .await
            .map_err(|source| OperationError::Explain {
                operation: "find_by_title",
                source,
            })
    }
}
