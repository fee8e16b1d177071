use futures::TryStreamExt;
use mongodb::bson::Document;

use crate::db::Database;
use crate::errors::{OperationError, Result};
use crate::models::{DeletionOutcome, MutationOutcome, Page, SortOrder};
use crate::queries;

impl Database {
    /// Runs `filter` and collects every matching document as stored
    pub async fn find_documents(
        &self,
        operation: &'static str,
        filter: Document,
    ) -> Result<Vec<Document>> {
        let cursor = self
            .books()
            .find(filter)
            .await
            .map_err(OperationError::query(operation))?;

        cursor
            .try_collect()
            .await
            .map_err(OperationError::query(operation))
    }

    pub async fn find_all(&self) -> Result<Vec<Document>> {
        self.find_documents("find_all", Document::new()).await
    }

    pub async fn find_by_genre(&self, genre: &str) -> Result<Vec<Document>> {
        self.find_documents("find_by_genre", queries::genre_equals(genre)).await
    }

    pub async fn find_published_after(&self, year: i32) -> Result<Vec<Document>> {
        self.find_documents("find_published_after", queries::published_after(year)).await
    }

    pub async fn find_by_author(&self, author: &str) -> Result<Vec<Document>> {
        self.find_documents("find_by_author", queries::author_equals(author)).await
    }

    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Document>> {
        self.find_documents("find_by_title", queries::title_equals(title)).await
    }

    pub async fn find_in_stock_published_after(&self, year: i32) -> Result<Vec<Document>> {
        self.find_documents(
            "find_in_stock_published_after",
            queries::in_stock_published_after(year),
        )
        .await
    }

    /// Sets `price` on the first book titled `title`
    pub async fn update_price_by_title(&self, title: &str, price: f64) -> Result<MutationOutcome> {
        let result = self
            .books()
            .update_one(queries::title_equals(title), queries::price_update(price))
            .await
            .map_err(|source| OperationError::Update {
                operation: "update_price_by_title",
                source,
            })?;

        let outcome = MutationOutcome::from(result);
        if outcome.matched_nothing() {
            tracing::warn!("Price update matched no book titled '{}'", title);
        }
        Ok(outcome)
    }

    /// Deletes the first book titled `title`
    pub async fn delete_by_title(&self, title: &str) -> Result<DeletionOutcome> {
        let result = self
            .books()
            .delete_one(queries::title_equals(title))
            .await
            .map_err(|source| OperationError::Delete {
                operation: "delete_by_title",
                source,
            })?;

        let outcome = DeletionOutcome::from(result);
        if outcome.matched_nothing() {
            tracing::warn!("Delete matched no book titled '{}'", title);
        }
        Ok(outcome)
    }

    /// Every document reduced to title, author and price (plus `_id`)
    pub async fn find_summaries(&self) -> Result<Vec<Document>> {
        let cursor = self
            .books()
            .find(Document::new())
            .projection(queries::summary_projection())
            .await
            .map_err(OperationError::query("find_summaries"))?;

        cursor
            .try_collect()
            .await
            .map_err(OperationError::query("find_summaries"))
    }

    pub async fn find_sorted_by_price(&self, order: SortOrder) -> Result<Vec<Document>> {
        tracing::debug!("Reading books by price, {}", order.label());

        let cursor = self
            .books()
            .find(Document::new())
            .sort(queries::price_sort(order))
            .await
            .map_err(OperationError::query("find_sorted_by_price"))?;

        cursor
            .try_collect()
            .await
            .map_err(OperationError::query("find_sorted_by_price"))
    }

    /// Independent skip-then-take read in natural order
    pub async fn find_page(&self, page: Page) -> Result<Vec<Document>> {
        let cursor = self
            .books()
            .find(Document::new())
            .skip(page.skip)
            .limit(page.limit)
            .await
            .map_err(OperationError::query("find_page"))?;

        cursor
            .try_collect()
            .await
            .map_err(OperationError::query("find_page"))
    }

    pub async fn count_books(&self) -> Result<u64> {
        self.books()
            .count_documents(Document::new())
            .await
            .map_err(OperationError::query("count_books"))
    }
}
