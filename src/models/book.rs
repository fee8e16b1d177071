use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A book of known shape, used to write the sample data set.
/// Reads never decode into this type; stored documents may differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub price: f64,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl Book {
    pub fn new(
        title: &str,
        author: &str,
        genre: &str,
        published_year: i32,
        price: f64,
        in_stock: bool,
    ) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            published_year,
            price,
            in_stock,
            pages: None,
            publisher: None,
        }
    }

    pub fn with_details(mut self, pages: i32, publisher: &str) -> Self {
        self.pages = Some(pages);
        self.publisher = Some(publisher.to_string());
        self
    }

    pub fn decade(&self) -> i32 {
        decade_of(self.published_year)
    }
}

/// Floors a year to the start of its decade (1949 -> 1940)
pub fn decade_of(year: i32) -> i32 {
    year - year.rem_euclid(10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_decade_of() {
        assert_eq!(decade_of(1949), 1940);
        assert_eq!(decade_of(1950), 1950);
        assert_eq!(decade_of(2023), 2020);
        assert_eq!(decade_of(1851), 1850);
    }

    #[test]
    fn test_book_decodes_from_stored_document() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "title": "1984",
            "author": "George Orwell",
            "genre": "Dystopian",
            "published_year": 1949,
            "price": 10.99,
            "in_stock": true,
            "pages": 328,
            "publisher": "Secker & Warburg",
        };

        let book: Book = bson::from_document(stored).unwrap();
        assert!(book.id.is_some());
        assert_eq!(book.title, "1984");
        assert_eq!(book.pages, Some(328));
        assert_eq!(book.decade(), 1940);
    }

    #[test]
    fn test_new_book_serializes_without_id() {
        let book = Book::new("Dune", "Frank Herbert", "Science Fiction", 1965, 9.99, true);
        let encoded = bson::to_document(&book).unwrap();
        assert!(!encoded.contains_key("_id"));
        assert!(!encoded.contains_key("pages"));
        assert_eq!(encoded.get_i32("published_year").unwrap(), 1965);
    }
}
