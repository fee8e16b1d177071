#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bookstore::models::{bson_number, decade_of};
    use bookstore::seed::sample_books;
    use bookstore::test_utils::TestContext;
    use mongodb::bson::{doc, Bson};

    #[tokio::test]
    async fn test_average_price_matches_arithmetic_mean() {
        let ctx = TestContext::new().await;

        let mut totals: HashMap<String, (f64, usize)> = HashMap::new();
        for book in sample_books() {
            let entry = totals.entry(book.genre.clone()).or_insert((0.0, 0));
            entry.0 += book.price;
            entry.1 += 1;
        }

        let rows = ctx.db.average_price_by_genre().await.unwrap();
        assert_eq!(rows.len(), totals.len());

        for row in rows {
            let genre = row.genre.as_str().expect("every sample book has a genre");
            let (sum, count) = totals[genre];
            let expected = sum / count as f64;
            let actual = bson_number(&row.avg_price).expect("every sample book has a price");
            assert!(
                (actual - expected).abs() < 1e-9,
                "genre {}: expected {}, got {}",
                genre,
                expected,
                actual
            );
        }

        ctx.teardown().await;
    }

    #[tokio::test]
    async fn test_top_author_has_maximum_count() {
        let ctx = TestContext::new().await;

        let mut counts: HashMap<String, i64> = HashMap::new();
        for book in sample_books() {
            *counts.entry(book.author).or_insert(0) += 1;
        }

        let top = ctx.db.top_author().await.unwrap().expect("collection is not empty");
        let author = top.author.as_str().expect("every sample book has an author");

        assert_eq!(counts[author], top.count);
        assert!(counts.values().all(|&count| top.count >= count));

        ctx.teardown().await;
    }

    #[tokio::test]
    async fn test_top_author_on_empty_collection() {
        let ctx = TestContext::empty().await;

        assert!(ctx.db.top_author().await.unwrap().is_none());
        assert!(ctx.db.average_price_by_genre().await.unwrap().is_empty());

        ctx.teardown().await;
    }

    #[tokio::test]
    async fn test_decade_buckets_floor_years() {
        let ctx = TestContext::new().await;

        let mut expected: HashMap<i64, i64> = HashMap::new();
        for book in sample_books() {
            *expected.entry(decade_of(book.published_year) as i64).or_insert(0) += 1;
        }

        let rows = ctx.db.books_per_decade().await.unwrap();
        let actual: HashMap<i64, i64> = rows
            .into_iter()
            .map(|row| {
                let decade = bson_number(&row.decade).expect("every sample book has a year");
                (decade as i64, row.count)
            })
            .collect();

        assert_eq!(actual, expected);
        assert!(actual.keys().all(|decade| decade % 10 == 0));

        ctx.teardown().await;
    }

    #[tokio::test]
    async fn test_index_creation_is_idempotent() {
        let ctx = TestContext::new().await;

        let title = ctx.db.create_title_index().await.unwrap();
        let compound = ctx.db.create_author_year_index().await.unwrap();
        assert_eq!(title, "title_1");
        assert_eq!(compound, "author_1_published_year_-1");

        assert_eq!(ctx.db.create_title_index().await.unwrap(), title);
        assert_eq!(ctx.db.create_author_year_index().await.unwrap(), compound);

        let names = ctx.db.list_index_names().await.unwrap();
        assert!(names.contains(&"_id_".to_string()));
        assert!(names.contains(&title));
        assert!(names.contains(&compound));
        assert_eq!(names.len(), 3);

        ctx.teardown().await;
    }

    #[tokio::test]
    async fn test_explain_reports_execution_stats() {
        let ctx = TestContext::new().await;
        ctx.db.create_title_index().await.unwrap();

        let plan = ctx.db.explain_find_by_title("1984").await.unwrap();
        assert!(plan.contains_key("queryPlanner"));

        let stats = plan.get_document("executionStats").unwrap();
        let returned = match stats.get("nReturned") {
            Some(Bson::Int32(n)) => *n as i64,
            Some(Bson::Int64(n)) => *n,
            other => panic!("unexpected nReturned: {:?}", other),
        };
        assert_eq!(returned, 1);

        ctx.teardown().await;
    }

    #[tokio::test]
    async fn test_pipelines_accept_loosely_typed_documents() {
        let ctx = TestContext::with_documents(vec![
            doc! { "title": "A", "author": "Ann", "genre": "Essay", "published_year": 1949.0, "price": 4 },
            doc! { "title": "B", "author": "Ann", "genre": "Essay", "published_year": 1941_i64, "price": 6.0 },
            doc! { "title": "C", "genre": "Essay", "price": 8.0 },
        ])
        .await;

        let decades = ctx.db.books_per_decade().await.unwrap();
        let forties = decades
            .iter()
            .find(|row| bson_number(&row.decade) == Some(1940.0))
            .expect("both dated books fall in the 1940s");
        assert_eq!(forties.count, 2);
        assert!(decades.iter().any(|row| row.decade == Bson::Null && row.count == 1));

        let averages = ctx.db.average_price_by_genre().await.unwrap();
        assert_eq!(averages.len(), 1);
        assert_eq!(bson_number(&averages[0].avg_price), Some(6.0));

        let top = ctx.db.top_author().await.unwrap().unwrap();
        assert_eq!(top.author.as_str(), Some("Ann"));
        assert_eq!(top.count, 2);

        ctx.teardown().await;
    }
}
