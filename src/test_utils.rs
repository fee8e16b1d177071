//! Test utilities backed by a throwaway MongoDB container.
//!
//! Every `TestContext` gets its own container and a uniquely named database,
//! so tests never see each other's writes.

use mongodb::bson::{self, Document};
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;

use crate::config::{Config, DEFAULT_COLLECTION};
use crate::db::Database;
use crate::models::Book;
use crate::seed;

const MONGO_PORT: u16 = 27017;

pub struct TestContext {
    pub container: ContainerAsync<Mongo>,
    pub config: Config,
    pub db: Database,
}

impl TestContext {
    /// Starts MongoDB and seeds the sample books
    pub async fn new() -> Self {
        let ctx = Self::empty().await;
        seed::seed_sample_books(&ctx.db)
            .await
            .expect("Failed to seed sample books");
        ctx
    }

    /// Starts MongoDB and inserts exactly `books`
    pub async fn with_books(books: Vec<Book>) -> Self {
        let ctx = Self::empty().await;
        if !books.is_empty() {
            ctx.db
                .collection::<Book>()
                .insert_many(&books)
                .await
                .expect("Failed to insert test books");
        }
        ctx
    }

    /// Starts MongoDB and inserts `documents` exactly as given
    pub async fn with_documents(documents: Vec<Document>) -> Self {
        let ctx = Self::empty().await;
        if !documents.is_empty() {
            ctx.db
                .books()
                .insert_many(&documents)
                .await
                .expect("Failed to insert test documents");
        }
        ctx
    }

    /// Starts MongoDB with an empty collection
    pub async fn empty() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start mongo container");

        let port = container
            .get_host_port_ipv4(MONGO_PORT)
            .await
            .expect("Failed to get mongo port");

        let config = Config {
            mongodb_uri: format!("mongodb://127.0.0.1:{}/?directConnection=true", port),
            database_name: unique_database_name(),
            collection_name: DEFAULT_COLLECTION.to_string(),
            seed_sample_data: false,
        };

        let db = connect_with_retry(&config).await;

        Self {
            container,
            config,
            db,
        }
    }

    /// Opens a second, independent connection to the same database
    pub async fn reconnect(&self) -> Database {
        connect_with_retry(&self.config).await
    }

    pub async fn teardown(self) {
        self.db.close().await;
    }
}

fn unique_database_name() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("bookstore_test_{}_{}", std::process::id(), nanos)
}

async fn connect_with_retry(config: &Config) -> Database {
    const MAX_RETRIES: u32 = 30;

    let mut retries = 0;
    loop {
        match Database::connect(
            &config.mongodb_uri,
            &config.database_name,
            &config.collection_name,
        )
        .await
        {
            Ok(db) => return db,
            Err(e) => {
                if retries == MAX_RETRIES - 1 {
                    panic!("Failed to connect to test database after {} retries: {}", MAX_RETRIES, e);
                }
                retries += 1;
                tokio::time::sleep(std::time::Duration::from_millis(500)).await;
            }
        }
    }
}

/// Decodes stored documents of known shape for typed assertions
pub fn decode_books(documents: Vec<Document>) -> Vec<Book> {
    documents
        .into_iter()
        .map(|document| bson::from_document(document).expect("Document is not a well-formed book"))
        .collect()
}

/// Books whose field values are chosen to make query results easy to predict
pub fn numbered_books(count: usize) -> Vec<Book> {
    (0..count)
        .map(|i| {
            Book::new(
                &format!("Book {:02}", i),
                &format!("Author {}", i % 3),
                if i % 2 == 0 { "Fiction" } else { "History" },
                1990 + i as i32,
                5.0 + i as f64,
                i % 4 != 0,
            )
        })
        .collect()
}
