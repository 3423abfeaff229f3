//! Seams to the outside world: the remote article API and the session store.

use async_trait::async_trait;

use crate::{
    error::ApiError,
    models::{Article, SessionUser},
};

/// Remote data client consumed by the post-detail page.
///
/// Futures are not `Send`: the browser implementation runs on the single
/// wasm event loop.
#[async_trait(?Send)]
pub trait ArticleApi {
    /// Fetch one article. `Ok(None)` means the server has no such slug.
    async fn fetch_article(&self, slug: &str) -> Result<Option<Article>, ApiError>;

    /// Delete the article owned by the token's user.
    async fn delete_article(&self, token: &str, slug: &str) -> Result<(), ApiError>;

    /// Favorite (`true`) or unfavorite (`false`) an article for the token's
    /// user. Returns the server's snapshot, which callers are free to ignore.
    async fn set_favorite(
        &self,
        token: &str,
        slug: &str,
        favorited: bool,
    ) -> Result<Article, ApiError>;

    /// Resolve the user behind a persisted token.
    async fn current_user(&self, token: &str) -> Result<SessionUser, ApiError>;
}

/// Read-only view of the session store.
pub trait SessionSource {
    /// The authenticated user, if any.
    fn current_user(&self) -> Option<&SessionUser>;

    /// The persisted auth token, if any.
    fn auth_token(&self) -> Option<&str>;

    /// Whether a user is logged in.
    fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }
}

/// Plain-value session, handy for tests and for pages that snapshot the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSession {
    /// Authenticated user.
    pub user: Option<SessionUser>,
    /// Persisted token.
    pub token: Option<String>,
}

impl StaticSession {
    /// A session with neither user nor token.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A logged-in session for `username` holding `token`.
    pub fn signed_in(username: &str, token: &str) -> Self {
        Self {
            user: Some(SessionUser {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                token: Some(token.to_string()),
                image: None,
                bio: None,
            }),
            token: Some(token.to_string()),
        }
    }
}

impl SessionSource for StaticSession {
    fn current_user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    fn auth_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}
