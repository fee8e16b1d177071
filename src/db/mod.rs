use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Collection,
};

use crate::errors::{OperationError, Result};

pub mod books;
pub mod aggregations;
pub mod indexes;
pub mod explain;

pub const APP_NAME: &str = "bookstore";

/// An acquired connection to one database.
///
/// Closing consumes the handle, so a `Database` is released at most once.
#[derive(Debug)]
pub struct Database {
    pub client: Client,
    pub db: mongodb::Database,
    collection_name: String,
}

impl Database {
    /// Opens a client against `uri` and pings `database` once.
    ///
    /// The driver connects lazily, so the ping is what turns an unreachable
    /// server into an error here instead of at the first query.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|source| OperationError::InvalidConnectionString {
                uri: uri.to_string(),
                source,
            })?;
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options).map_err(|source| {
            OperationError::InvalidConnectionString {
                uri: uri.to_string(),
                source,
            }
        })?;
        let db = client.database(database);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| OperationError::Connect {
                database: database.to_string(),
                source,
            })?;

        tracing::debug!("Connected to database '{}'", database);

        Ok(Self {
            client,
            db,
            collection_name: collection.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        self.db.name()
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    /// Raw handle on the book collection, re-derived on every call.
    /// Documents are read as stored; no shape is imposed on them.
    pub fn books(&self) -> Collection<Document> {
        self.collection::<Document>()
    }

    /// The book collection viewed as `T`, for writes of known shape
    pub fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.collection::<T>(&self.collection_name)
    }

    pub async fn ping(&self) -> Result<()> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|source| OperationError::Connect {
                database: self.name().to_string(),
                source,
            })
    }

    /// Releases the connection; pooled sockets are closed by the driver
    pub async fn close(self) {
        self.client.shutdown().await;
        tracing::debug!("Database client shut down");
    }
}
