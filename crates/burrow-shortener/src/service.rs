use async_trait::async_trait;
use burrow_core::{Repository, ShortCode, Shortener, ShortenerError, UrlRecord};
use burrow_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator`. The original URL is
/// stored as given: it is neither validated nor deduplicated, and a generated
/// code is never checked against existing ones. No collision retry is
/// performed.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }

    fn generate_code(&self) -> ShortCode {
        self.generator.generate().into()
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, original_url: String) -> Result<ShortCode, ShortenerError> {
        let short_code = self.generate_code();

        self.repository
            .insert(&short_code, UrlRecord::new(original_url))
            .await?;

        debug!(code = %short_code, "stored short code");
        Ok(short_code)
    }

    async fn resolve(&self, code: &ShortCode) -> Result<Option<UrlRecord>, ShortenerError> {
        trace!(code = %code, "resolving short code");
        Ok(self.repository.get(code).await?)
    }
}
