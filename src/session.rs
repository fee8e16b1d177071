//! The query session: connect, run every step in order, always disconnect.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::db::Database;
use crate::errors::{OperationError, Result};
use crate::models::{Page, SortOrder};
use crate::seed;

const FICTION: &str = "Fiction";
const RECENT_YEAR: i32 = 2000;
const ORWELL: &str = "George Orwell";
const REPRICED_TITLE: &str = "1984";
const NEW_PRICE: f64 = 12.99;
const REMOVED_TITLE: &str = "Moby Dick";
const IN_STOCK_YEAR: i32 = 2010;
const PAGE_SIZE: i64 = 5;

/// Where session output goes.
///
/// `closed` is called exactly once per run, after the connection (if any)
/// has been released.
pub trait ObservationSink {
    fn connected(&mut self, database: &str);
    fn report(&mut self, label: &str, value: &serde_json::Value);
    fn failure(&mut self, message: &str);
    fn closed(&mut self);
}

/// Pretty-prints results to stdout and failures to stderr
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ObservationSink for ConsoleSink {
    fn connected(&mut self, database: &str) {
        println!("Connected to MongoDB database '{}'!", database);
    }

    fn report(&mut self, label: &str, value: &serde_json::Value) {
        let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        println!("\n== {} ==\n{}", label, rendered);
    }

    fn failure(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn closed(&mut self) {
        println!("Connection closed");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Connected(String),
    Report { label: String, value: serde_json::Value },
    Failure(String),
    Closed,
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SessionEvent>,
    panic_on_report: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panics when asked to report `label`, to simulate a step blowing up
    pub fn panicking_on(label: &str) -> Self {
        Self {
            events: Vec::new(),
            panic_on_report: Some(label.to_string()),
        }
    }

    pub fn closed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SessionEvent::Closed))
            .count()
    }

    pub fn failures(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SessionEvent::Failure(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Value reported under `label`, if any
    pub fn reported(&self, label: &str) -> Option<&serde_json::Value> {
        self.events.iter().find_map(|event| match event {
            SessionEvent::Report { label: l, value } if l == label => Some(value),
            _ => None,
        })
    }

    pub fn report_labels(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SessionEvent::Report { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ObservationSink for RecordingSink {
    fn connected(&mut self, database: &str) {
        self.events.push(SessionEvent::Connected(database.to_string()));
    }

    fn report(&mut self, label: &str, value: &serde_json::Value) {
        if self.panic_on_report.as_deref() == Some(label) {
            panic!("sink refused to report '{}'", label);
        }
        self.events.push(SessionEvent::Report {
            label: label.to_string(),
            value: value.clone(),
        });
    }

    fn failure(&mut self, message: &str) {
        self.events.push(SessionEvent::Failure(message.to_string()));
    }

    fn closed(&mut self) {
        self.events.push(SessionEvent::Closed);
    }
}

/// Summary of one run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SessionReport {
    pub connected: bool,
    pub steps_completed: Vec<&'static str>,
    pub failure: Option<String>,
}

impl SessionReport {
    pub fn succeeded(&self) -> bool {
        self.connected && self.failure.is_none()
    }
}

pub struct SessionRunner<S: ObservationSink> {
    config: Config,
    sink: S,
}

impl<S: ObservationSink> SessionRunner<S> {
    pub fn new(config: Config, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Runs the whole session.
    ///
    /// The first failure stops the remaining steps. Whatever happens, the
    /// connection is released and `closed` is emitted once before returning.
    pub async fn run(&mut self) -> SessionReport {
        let mut report = SessionReport::default();

        info!(
            "Starting bookstore session on {}.{}",
            self.config.database_name, self.config.collection_name
        );

        match Database::connect(
            &self.config.mongodb_uri,
            &self.config.database_name,
            &self.config.collection_name,
        )
        .await
        {
            Ok(db) => {
                report.connected = true;

                let outcome = AssertUnwindSafe(self.execute(&db, &mut report))
                    .catch_unwind()
                    .await;

                match outcome {
                    Ok(Ok(())) => {
                        info!("All {} steps completed", report.steps_completed.len());
                    }
                    Ok(Err(e)) => self.fail(&mut report, e.error_code(), e.to_string()),
                    Err(panic) => {
                        self.fail(&mut report, "PANIC", panic_message(panic.as_ref()))
                    }
                }

                db.close().await;
            }
            Err(e) => {
                self.fail(&mut report, e.error_code(), e.to_string());
            }
        }

        self.sink.closed();
        info!("Session finished, connection closed");
        report
    }

    fn fail(&mut self, report: &mut SessionReport, code: &str, message: String) {
        error!(
            "Session aborted after {} steps [{}]: {}",
            report.steps_completed.len(),
            code,
            message
        );
        self.sink.failure(&message);
        report.failure = Some(message);
    }

    async fn execute(&mut self, db: &Database, report: &mut SessionReport) -> Result<()> {
        self.sink.connected(db.name());

        if self.config.seed_sample_data {
            let inserted = seed::seed_sample_books(db).await?;
            self.emit(report, "seeded books", &inserted)?;
        }

        // Filtered reads
        let fiction = db.find_by_genre(FICTION).await?;
        self.emit(report, "books in genre Fiction", &fiction)?;

        let recent = db.find_published_after(RECENT_YEAR).await?;
        self.emit(report, "books published after 2000", &recent)?;

        let orwell = db.find_by_author(ORWELL).await?;
        self.emit(report, "books by George Orwell", &orwell)?;

        // Point mutation and deletion
        let updated = db.update_price_by_title(REPRICED_TITLE, NEW_PRICE).await?;
        self.emit(report, "price update for 1984", &updated)?;

        let deleted = db.delete_by_title(REMOVED_TITLE).await?;
        self.emit(report, "deletion of Moby Dick", &deleted)?;

        // Compound and projected reads
        let in_stock = db.find_in_stock_published_after(IN_STOCK_YEAR).await?;
        self.emit(report, "in-stock books published after 2010", &in_stock)?;

        let summaries = db.find_summaries().await?;
        self.emit(report, "title, author and price of every book", &summaries)?;

        // Sorting
        let ascending = db.find_sorted_by_price(SortOrder::Ascending).await?;
        self.emit(report, "books by price ascending", &ascending)?;

        let descending = db.find_sorted_by_price(SortOrder::Descending).await?;
        self.emit(report, "books by price descending", &descending)?;

        // Pagination
        let first_page = db.find_page(Page::nth(0, PAGE_SIZE)).await?;
        self.emit(report, "page 1", &first_page)?;

        let second_page = db.find_page(Page::nth(1, PAGE_SIZE)).await?;
        self.emit(report, "page 2", &second_page)?;

        // Aggregations
        let by_genre = db.average_price_by_genre().await?;
        self.emit(report, "average price by genre", &by_genre)?;

        let top = db.top_author().await?;
        self.emit(report, "author with the most books", &top)?;

        let by_decade = db.books_per_decade().await?;
        self.emit(report, "books per decade", &by_decade)?;

        // Indexes
        let title_index = db.create_title_index().await?;
        self.emit(report, "title index", &title_index)?;

        let compound_index = db.create_author_year_index().await?;
        self.emit(report, "author and published_year index", &compound_index)?;

        // Plan inspection
        let plan = db.explain_find_by_title(REPRICED_TITLE).await?;
        self.emit(report, "execution stats for title lookup", &plan)?;

        Ok(())
    }

    fn emit<T: Serialize>(
        &mut self,
        report: &mut SessionReport,
        label: &'static str,
        value: &T,
    ) -> Result<()> {
        let rendered = serde_json::to_value(value).map_err(|source| OperationError::Render {
            operation: label,
            source,
        })?;

        if rendered.as_array().is_some_and(|rows| rows.is_empty()) {
            warn!("Step '{}' returned no documents", label);
        }
        debug!("Step '{}' completed", label);

        self.sink.report(label, &rendered);
        report.steps_completed.push(label);
        Ok(())
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("Session step panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("Session step panicked: {}", message)
    } else {
        "Session step panicked".to_string()
    }
}
