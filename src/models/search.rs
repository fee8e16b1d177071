#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Sort direction as understood by the server (`1` / `-1`)
    pub fn direction(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Ascending
    }
}

/// Offset/limit pair for an independent skip-then-take read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of documents to skip
    pub skip: u64,
    /// Maximum number of documents to return
    pub limit: i64,
}

impl Page {
    pub fn new(skip: u64, limit: i64) -> Self {
        Self { skip, limit }
    }

    /// Zero-based page `index` of `size` documents
    pub fn nth(index: u64, size: i64) -> Self {
        Self {
            skip: index * size.max(0) as u64,
            limit: size,
        }
    }
}
