//! Static query literals issued by the session.
//!
//! Nothing here talks to the server; every function just builds the BSON the
//! engine is handed, so the shapes can be checked without a database.

use mongodb::bson::{doc, Document};

use crate::models::SortOrder;

pub const EXECUTION_STATS: &str = "executionStats";

pub fn genre_equals(genre: &str) -> Document {
    doc! { "genre": genre }
}

pub fn author_equals(author: &str) -> Document {
    doc! { "author": author }
}

pub fn title_equals(title: &str) -> Document {
    doc! { "title": title }
}

pub fn published_after(year: i32) -> Document {
    doc! { "published_year": { "$gt": year } }
}

/// In-stock books published strictly after `year`
pub fn in_stock_published_after(year: i32) -> Document {
    doc! {
        "in_stock": true,
        "published_year": { "$gt": year },
    }
}

pub fn summary_projection() -> Document {
    doc! { "title": 1, "author": 1, "price": 1 }
}

pub fn price_sort(order: SortOrder) -> Document {
    doc! { "price": order.direction() }
}

pub fn price_update(price: f64) -> Document {
    doc! { "$set": { "price": price } }
}

pub fn average_price_by_genre() -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": "$genre",
            "avgPrice": { "$avg": "$price" },
        }
    }]
}

/// Author with the most books; ties resolve however the server orders them
pub fn top_author() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$author", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
        doc! { "$limit": 1 },
    ]
}

pub fn books_per_decade() -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": {
                "$subtract": [
                    "$published_year",
                    { "$mod": ["$published_year", 10] },
                ]
            },
            "count": { "$sum": 1 },
        }
    }]
}

pub fn title_index_keys() -> Document {
    doc! { "title": 1 }
}

pub fn author_year_index_keys() -> Document {
    doc! { "author": 1, "published_year": -1 }
}

/// `explain` command wrapping a plain `find` on `collection`
pub fn explain_find(collection: &str, filter: Document, verbosity: &str) -> Document {
    doc! {
        "explain": {
            "find": collection,
            "filter": filter,
        },
        "verbosity": verbosity,
    }
}
