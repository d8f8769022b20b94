use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored URL record in the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The original URL that was shortened, stored verbatim.
    pub original_url: String,
}

impl UrlRecord {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
        }
    }
}

/// A read-only view of a repository.
///
/// This trait provides only the lookup half of [`Repository`], so the
/// resolve path can be handed a store it cannot write to.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the URL record for a given short code.
    ///
    /// Returns `None` if no record carries the code. When several records
    /// share a code, the earliest inserted one is returned.
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Appends a new URL record under `code`.
    ///
    /// Codes are not checked for uniqueness: inserting an existing code
    /// succeeds and leaves the earlier record in place for lookups.
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()>;
}
