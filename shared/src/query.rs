//! Article query keyed by slug.

use crate::{error::ApiError, models::Article};

/// Lifecycle of one keyed request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryState<T> {
    /// No request issued yet.
    #[default]
    Idle,
    /// Waiting for the server.
    Loading,
    /// The request failed.
    Failed(ApiError),
    /// The request succeeded.
    Ready(T),
}

/// Fetch state for the article shown on the page.
///
/// A response is applied only if it belongs to the slug currently requested,
/// so a slow answer for a previous slug never overwrites the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    slug: Option<String>,
    state: QueryState<Option<Article>>,
}

impl ArticleQuery {
    /// Slug currently requested.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Current state.
    pub fn state(&self) -> &QueryState<Option<Article>> {
        &self.state
    }

    /// The loaded article, if any.
    pub fn article(&self) -> Option<&Article> {
        match &self.state {
            QueryState::Ready(Some(article)) => Some(article),
            _ => None,
        }
    }

    /// Whether `slug` needs a request: it is not the current key, or nothing
    /// was issued yet.
    pub fn needs_fetch(&self, slug: &str) -> bool {
        self.slug.as_deref() != Some(slug) || self.state == QueryState::Idle
    }

    /// Start (or restart) the request for `slug`.
    pub fn start(&mut self, slug: &str) {
        self.slug = Some(slug.to_string());
        self.state = QueryState::Loading;
    }

    /// Apply a response. Returns `false` when it belongs to another slug and
    /// was discarded.
    pub fn resolve(&mut self, slug: &str, result: Result<Option<Article>, ApiError>) -> bool {
        if self.slug.as_deref() != Some(slug) {
            tracing::warn!(%slug, current = ?self.slug, "discarding stale article response");
            return false;
        }
        self.state = match result {
            Ok(article) => QueryState::Ready(article),
            Err(err) => QueryState::Failed(err),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_article;

    #[test]
    fn slug_change_requires_a_new_fetch() {
        let mut query = ArticleQuery::default();
        assert!(query.needs_fetch("a"));
        query.start("a");
        assert!(!query.needs_fetch("a"));
        assert!(query.needs_fetch("b"));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut query = ArticleQuery::default();
        query.start("a");
        query.start("b");

        assert!(!query.resolve("a", Ok(Some(sample_article("a", "x")))));
        assert_eq!(query.state(), &QueryState::Loading);

        assert!(query.resolve("b", Ok(Some(sample_article("b", "x")))));
        assert_eq!(query.article().map(|article| article.slug.as_str()), Some("b"));
    }

    #[test]
    fn not_found_is_distinct_from_failure() {
        let mut query = ArticleQuery::default();
        query.start("gone");
        query.resolve("gone", Ok(None));
        assert_eq!(query.state(), &QueryState::Ready(None));
        assert!(query.article().is_none());

        query.start("broken");
        query.resolve("broken", Err(ApiError::Network("offline".to_string())));
        assert!(matches!(query.state(), QueryState::Failed(_)));
    }
}
