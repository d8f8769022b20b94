use std::sync::Arc;

use burrow_core::ShortCode;
use burrow_storage::{ReadRepository, Repository, SqliteRepository, UrlRecord};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    repo: SqliteRepository,
}

impl Fixture {
    async fn start() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let repo = SqliteRepository::connect(dir.path().join("database.sqlite3"))
            .await
            .expect("open sqlite store");

        Self { dir, repo }
    }

    fn database_path(&self) -> std::path::PathBuf {
        self.dir.path().join("database.sqlite3")
    }
}

fn code(value: &str) -> ShortCode {
    ShortCode::new(value)
}

#[tokio::test]
async fn connect_creates_the_database_file() {
    let fixture = Fixture::start().await;

    assert!(fixture.database_path().exists());
}

#[tokio::test]
async fn insert_and_get_record() {
    let fixture = Fixture::start().await;
    let short_code = code("abc123");

    fixture
        .repo
        .insert(&short_code, UrlRecord::new("https://example.com"))
        .await
        .unwrap();

    let got = fixture.repo.get(&short_code).await.unwrap().unwrap();
    assert_eq!(got.original_url, "https://example.com");
}

#[tokio::test]
async fn get_returns_none_for_unknown_code() {
    let fixture = Fixture::start().await;

    let got = fixture.repo.get(&code("doesnotexist123")).await.unwrap();
    assert!(got.is_none());
}

#[tokio::test]
async fn original_url_is_stored_verbatim() {
    let fixture = Fixture::start().await;
    let short_code = code("Zz9Yy8");
    let original = "not a url at all ✓ ?q=1&x='quoted'";

    fixture
        .repo
        .insert(&short_code, UrlRecord::new(original))
        .await
        .unwrap();

    let got = fixture.repo.get(&short_code).await.unwrap().unwrap();
    assert_eq!(got.original_url, original);
}

#[tokio::test]
async fn duplicate_code_is_accepted_and_first_row_wins() {
    let fixture = Fixture::start().await;
    let short_code = code("dup001");

    fixture
        .repo
        .insert(&short_code, UrlRecord::new("https://one.example"))
        .await
        .unwrap();
    fixture
        .repo
        .insert(&short_code, UrlRecord::new("https://two.example"))
        .await
        .unwrap();

    let got = fixture.repo.get(&short_code).await.unwrap().unwrap();
    assert_eq!(got.original_url, "https://one.example");
}

#[tokio::test]
async fn records_survive_reopening_the_file() {
    let fixture = Fixture::start().await;
    let short_code = code("keep01");

    fixture
        .repo
        .insert(&short_code, UrlRecord::new("https://example.com/kept"))
        .await
        .unwrap();
    fixture.repo.close().await;

    let reopened = SqliteRepository::connect(fixture.database_path())
        .await
        .unwrap();
    let got = reopened.get(&short_code).await.unwrap().unwrap();
    assert_eq!(got.original_url, "https://example.com/kept");
}

#[tokio::test]
async fn concurrent_inserts_are_all_visible() {
    let fixture = Fixture::start().await;
    let repo = Arc::new(fixture.repo.clone());
    let mut handles = vec![];

    for i in 0..20u32 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.insert(
                &ShortCode::new(format!("cc{:04}", i)),
                UrlRecord::new(format!("https://example{}.com", i)),
            )
            .await
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for i in 0..20u32 {
        let got = repo
            .get(&ShortCode::new(format!("cc{:04}", i)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(got.original_url, format!("https://example{}.com", i));
    }
}
