use tracing::info;

use crate::db::Database;
use crate::errors::{OperationError, Result};
use crate::models::Book;

/// The bookstore sample data set
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("To Kill a Mockingbird", "Harper Lee", "Fiction", 1960, 13.49, true)
            .with_details(336, "J. B. Lippincott & Co."),
        Book::new("1984", "George Orwell", "Dystopian", 1949, 10.99, true)
            .with_details(328, "Secker & Warburg"),
        Book::new("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 1925, 9.99, true)
            .with_details(180, "Charles Scribner's Sons"),
        Book::new("Brave New World", "Aldous Huxley", "Dystopian", 1932, 11.50, false)
            .with_details(311, "Chatto & Windus"),
        Book::new("The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937, 14.99, true)
            .with_details(310, "George Allen & Unwin"),
        Book::new("The Catcher in the Rye", "J.D. Salinger", "Fiction", 1951, 8.99, true)
            .with_details(224, "Little, Brown and Company"),
        Book::new("Pride and Prejudice", "Jane Austen", "Romance", 1813, 7.99, true)
            .with_details(432, "T. Egerton"),
        Book::new("The Lord of the Rings", "J.R.R. Tolkien", "Fantasy", 1954, 19.99, true)
            .with_details(1178, "Allen & Unwin"),
        Book::new("Animal Farm", "George Orwell", "Political Satire", 1945, 8.50, false)
            .with_details(112, "Secker & Warburg"),
        Book::new("The Alchemist", "Paulo Coelho", "Fiction", 1988, 10.49, true)
            .with_details(197, "HarperOne"),
        Book::new("Moby Dick", "Herman Melville", "Adventure", 1851, 12.50, false)
            .with_details(635, "Harper & Brothers"),
        Book::new("Wuthering Heights", "Emily Brontë", "Gothic Fiction", 1847, 9.49, true)
            .with_details(342, "Thomas Cautley Newby"),
        Book::new("The Road", "Cormac McCarthy", "Fiction", 2006, 15.99, false)
            .with_details(287, "Alfred A. Knopf"),
        Book::new("The Martian", "Andy Weir", "Science Fiction", 2011, 16.99, true)
            .with_details(369, "Crown Publishing"),
        Book::new("Project Hail Mary", "Andy Weir", "Science Fiction", 2021, 18.49, true)
            .with_details(496, "Ballantine Books"),
    ]
}

/// Inserts the sample books when the collection is empty.
/// Returns how many books were inserted (0 when data already exists).
pub async fn seed_sample_books(db: &Database) -> Result<usize> {
    let existing = db.count_books().await?;
    if existing > 0 {
        info!(
            "Collection '{}' already holds {} books, skipping seed",
            db.collection_name(),
            existing
        );
        return Ok(0);
    }

    let books = sample_books();
    let result = db
        .collection::<Book>()
        .insert_many(&books)
        .await
        .map_err(|source| OperationError::Seed {
            collection: db.collection_name().to_string(),
            source,
        })?;

    let inserted = result.inserted_ids.len();
    info!(
        "Seeded {} books into '{}.{}'",
        inserted,
        db.name(),
        db.collection_name()
    );
    Ok(inserted)
}
