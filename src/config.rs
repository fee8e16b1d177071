use anyhow::Result;
use std::env;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "plp_bookstore";
pub const DEFAULT_COLLECTION: &str = "books";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database_name: DEFAULT_DATABASE.to_string(),
            collection_name: DEFAULT_COLLECTION.to_string(),
            seed_sample_data: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string()),
            database_name: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| DEFAULT_DATABASE.to_string()),
            collection_name: env::var("MONGODB_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_COLLECTION.to_string()),
            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .ok()
                .map(|s| parse_flag(&s))
                .unwrap_or(false),
        })
    }

    /// Applies command-line overrides on top of the environment values
    pub fn with_overrides(
        mut self,
        uri: Option<String>,
        database: Option<String>,
        collection: Option<String>,
        seed: bool,
    ) -> Self {
        if let Some(uri) = uri {
            self.mongodb_uri = uri;
        }
        if let Some(database) = database {
            self.database_name = database;
        }
        if let Some(collection) = collection {
            self.collection_name = collection;
        }
        self.seed_sample_data |= seed;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
