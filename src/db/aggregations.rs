use futures::TryStreamExt;
use mongodb::bson::{self, Document};
use serde::de::DeserializeOwned;

use crate::db::Database;
use crate::errors::{OperationError, Result};
use crate::models::{AuthorBookCount, DecadeBookCount, GenreAveragePrice};
use crate::queries;

impl Database {
    /// Runs `pipeline` and decodes every output row into `T`
    pub async fn run_pipeline<T>(&self, name: &'static str, pipeline: Vec<Document>) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let cursor = self
            .books()
            .aggregate(pipeline)
            .await
            .map_err(OperationError::aggregate(name))?;

        let rows: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(OperationError::aggregate(name))?;

        rows.into_iter()
            .map(|row| bson::from_document(row).map_err(OperationError::decode(name)))
            .collect()
    }

    pub async fn average_price_by_genre(&self) -> Result<Vec<GenreAveragePrice>> {
        self.run_pipeline("average_price_by_genre", queries::average_price_by_genre())
            .await
    }

    /// Author with the most books, `None` on an empty collection
    pub async fn top_author(&self) -> Result<Option<AuthorBookCount>> {
        let rows: Vec<AuthorBookCount> = self
            .run_pipeline("top_author", queries::top_author())
            .await?;
        Ok(rows.into_iter().next())
    }

    pub async fn books_per_decade(&self) -> Result<Vec<DecadeBookCount>> {
        self.run_pipeline("books_per_decade", queries::books_per_decade())
            .await
    }
}
