use thiserror::Error;

pub type Result<T> = std::result::Result<T, OperationError>;

/// Any failure while talking to the bookstore database or reporting its results.
///
/// The session treats every variant as terminal for the run: it is reported
/// once and the remaining steps are skipped.
#[derive(Error, Debug)]
pub enum OperationError {
    #[error("Invalid connection settings for '{uri}': {source}")]
    InvalidConnectionString {
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Failed to connect to database '{database}': {source}")]
    Connect {
        database: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Query '{operation}' failed: {source}")]
    Query {
        operation: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Update '{operation}' failed: {source}")]
    Update {
        operation: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Delete '{operation}' failed: {source}")]
    Delete {
        operation: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Aggregation '{pipeline}' failed: {source}")]
    Aggregate {
        pipeline: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Failed to create index on {keys}: {source}")]
    Index {
        keys: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Explain for '{operation}' failed: {source}")]
    Explain {
        operation: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Seeding collection '{collection}' failed: {source}")]
    Seed {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Could not decode result of '{operation}': {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: mongodb::bson::de::Error,
    },

    #[error("Could not render result of '{operation}': {source}")]
    Render {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl OperationError {
    /// Short stable label of the failing operation kind, used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            OperationError::InvalidConnectionString { .. } => "INVALID_CONNECTION_STRING",
            OperationError::Connect { .. } => "CONNECT_FAILED",
            OperationError::Query { .. } => "QUERY_FAILED",
            OperationError::Update { .. } => "UPDATE_FAILED",
            OperationError::Delete { .. } => "DELETE_FAILED",
            OperationError::Aggregate { .. } => "AGGREGATE_FAILED",
            OperationError::Index { .. } => "INDEX_FAILED",
            OperationError::Explain { .. } => "EXPLAIN_FAILED",
            OperationError::Seed { .. } => "SEED_FAILED",
            OperationError::Decode { .. } => "DECODE_FAILED",
            OperationError::Render { .. } => "RENDER_FAILED",
        }
    }

    pub(crate) fn query(operation: &'static str) -> impl FnOnce(mongodb::error::Error) -> Self {
        move |source| OperationError::Query { operation, source }
    }

    pub(crate) fn aggregate(pipeline: &'static str) -> impl FnOnce(mongodb::error::Error) -> Self {
        move |source| OperationError::Aggregate { pipeline, source }
    }

    pub(crate) fn decode(operation: &'static str) -> impl FnOnce(mongodb::bson::de::Error) -> Self {
        move |source| OperationError::Decode { operation, source }
    }
}
