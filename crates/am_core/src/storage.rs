use async_trait::async_trait;

use crate::types::{Article, ArticlePage, ListParams, NewArticle};
use crate::Result;

/// The function-call contract of the mock API. Consumers receive an
/// implementation as `Arc<dyn ArticleStore>` instead of reaching for
/// shared global state.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Page through the collection, optionally filtered by a search query
    async fn list(&self, params: &ListParams) -> Result<ArticlePage>;

    /// Return a copy of the full collection, newest first
    async fn get_all(&self) -> Result<Vec<Article>>;

    /// Find a single article; absence is a normal result, not an error
    async fn get_by_id(&self, id: &str) -> Result<Option<Article>>;

    /// Validate and store a new article, returning it with its assigned id
    async fn create(&self, payload: &NewArticle) -> Result<Article>;
}
