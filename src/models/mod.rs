// Re-export all model types for ease of use

pub mod book;
pub mod aggregates;
pub mod search;
pub mod responses;

// Re-export commonly used types
pub use book::*;
pub use aggregates::*;
pub use search::*;
pub use responses::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_directions() {
        assert_eq!(SortOrder::Ascending.direction(), 1);
        assert_eq!(SortOrder::Descending.direction(), -1);
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }

    #[test]
    fn test_nth_page() {
        assert_eq!(Page::nth(0, 5), Page::new(0, 5));
        assert_eq!(Page::nth(1, 5), Page::new(5, 5));
        assert_eq!(Page::nth(3, 10), Page::new(30, 10));
    }

    #[test]
    fn test_zero_match_outcomes() {
        assert!(MutationOutcome { matched: 0, modified: 0 }.matched_nothing());
        assert!(!MutationOutcome { matched: 1, modified: 0 }.matched_nothing());
        assert!(DeletionOutcome { deleted: 0 }.matched_nothing());
    }
}
