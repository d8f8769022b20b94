use async_trait::async_trait;
use burrow_core::repository::{ReadRepository, Repository, Result, UrlRecord};
use burrow_core::shortcode::ShortCode;
use dashmap::DashMap;

/// In-memory implementation of the repository traits using DashMap.
///
/// DashMap shards its locks, so concurrent reads and writes to different
/// buckets don't block each other. Nothing is persisted across restarts.
///
/// Duplicate codes keep the first record, mirroring the SQLite backend where
/// the earliest row wins on lookup.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    storage: DashMap<String, String>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of distinct codes held.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|entry| UrlRecord::new(entry.value().as_str())))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        self.storage
            .entry(code.as_str().to_owned())
            .or_insert(record.original_url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ShortCode {
        ShortCode::new(s)
    }

    #[tokio::test]
    async fn save_and_get() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), UrlRecord::new("https://example.com"))
            .await
            .unwrap();

        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.get(&code("nope")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn duplicate_code_keeps_first_record() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), UrlRecord::new("https://first.com"))
            .await
            .unwrap();
        repo.insert(&code("abc123"), UrlRecord::new("https://second.com"))
            .await
            .unwrap();

        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.original_url, "https://first.com");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn lookup_is_exact() {
        let repo = InMemoryRepository::with_capacity(4);

        repo.insert(&code("abc123"), UrlRecord::new("https://example.com"))
            .await
            .unwrap();

        assert!(repo.get(&code("ABC123")).await.unwrap().is_none());
        assert!(repo.get(&code("abc12")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let c = ShortCode::new(format!("code{:02}", i));
                let r = UrlRecord::new(format!("https://example{}.com", i));
                repo.insert(&c, r).await.unwrap();
            });
            handles.push(handle);
        }

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let c = ShortCode::new(format!("code{:02}", i));
                let _ = repo.get(&c).await;
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let c = ShortCode::new(format!("code{:02}", i));
            let result = repo.get(&c).await.unwrap().unwrap();
            assert_eq!(result.original_url, format!("https://example{}.com", i));
        }
        assert_eq!(repo.len(), 10);
    }
}
