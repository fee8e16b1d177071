use mongodb::results::{DeleteResult, UpdateResult};
use serde::{Deserialize, Serialize};

/// What a single-document update did.
/// Matching nothing is still a successful outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationOutcome {
    pub matched: u64,
    pub modified: u64,
}

impl MutationOutcome {
    pub fn matched_nothing(&self) -> bool {
        self.matched == 0
    }
}

impl From<UpdateResult> for MutationOutcome {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched: result.matched_count,
            modified: result.modified_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionOutcome {
    pub deleted: u64,
}

impl DeletionOutcome {
    pub fn matched_nothing(&self) -> bool {
        self.deleted == 0
    }
}

impl From<DeleteResult> for DeletionOutcome {
    fn from(result: DeleteResult) -> Self {
        Self {
            deleted: result.deleted_count,
        }
    }
}
