use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

// Group keys and computed values keep whatever BSON type the server
// produced, since stored documents carry no fixed schema.

/// Output row of the average-price-per-genre pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreAveragePrice {
    #[serde(rename = "_id")]
    pub genre: Bson,
    #[serde(rename = "avgPrice")]
    pub avg_price: Bson,
}

/// Output row of the books-per-author pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorBookCount {
    #[serde(rename = "_id")]
    pub author: Bson,
    pub count: i64,
}

/// Output row of the books-per-decade pipeline.
/// `decade` is null for documents without a numeric `published_year`,
/// and a double when the year was stored as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeBookCount {
    #[serde(rename = "_id")]
    pub decade: Bson,
    pub count: i64,
}

/// Numeric BSON value widened to `f64`
pub fn bson_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(*n as f64),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(n) => Some(*n),
        _ => None,
    }
}
