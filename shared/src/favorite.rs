//! Favorite toggle: the locally shadowed `favorited`/`favoritesCount` pair and
//! the request that mutates it.

use crate::{
    api::{ArticleApi, SessionSource},
    error::ApiError,
    models::Article,
};

/// Viewer-relative favorite state mirrored from the last article snapshot.
///
/// Only two things write it: a fresh snapshot (`sync`) and a settled toggle
/// (`settle`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FavoriteShadow {
    /// Whether the viewer has favorited the article.
    pub is_favorited: bool,
    /// Displayed favorites count.
    pub likes_count: u32,
    /// A toggle request is outstanding; the control is disabled.
    pub pending: bool,
}

/// A toggle that passed its preconditions and is ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    /// Token proving the viewer's identity.
    pub token: String,
    /// Article to toggle.
    pub slug: String,
    /// Local state before the attempt.
    pub was_favorited: bool,
}

impl ToggleRequest {
    /// The state being asked for.
    pub fn desired(&self) -> bool {
        !self.was_favorited
    }
}

/// How a toggle request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The server accepted the change.
    Confirmed {
        /// Local state before the attempt.
        was_favorited: bool,
    },
    /// The server or the network refused; local state stays as it was.
    Failed(ApiError),
}

impl FavoriteShadow {
    /// Shadow state for a freshly fetched article.
    pub fn from_article(article: &Article) -> Self {
        Self {
            is_favorited: article.favorited,
            likes_count: article.favorites_count,
            pending: false,
        }
    }

    /// Re-read the server truth from a new snapshot. An outstanding request
    /// keeps the control disabled until it settles.
    pub fn sync(&mut self, article: &Article) {
        self.is_favorited = article.favorited;
        self.likes_count = article.favorites_count;
    }

    /// Check the preconditions of a toggle.
    ///
    /// Returns `None` without side effects when no token is persisted or a
    /// toggle is already in flight.
    pub fn prepare<S>(&self, session: &S, slug: &str) -> Option<ToggleRequest>
    where
        S: SessionSource + ?Sized,
    {
        if self.pending {
            return None;
        }
        let token = session.auth_token()?;
        Some(ToggleRequest {
            token: token.to_string(),
            slug: slug.to_string(),
            was_favorited: self.is_favorited,
        })
    }

    /// Mark a prepared request as sent.
    pub fn begin(&mut self) {
        self.pending = true;
    }

    /// Apply the result of a request. The count is derived from local state,
    /// never from the server response.
    pub fn settle(&mut self, outcome: &ToggleOutcome) {
        self.pending = false;
        if let ToggleOutcome::Confirmed {
            was_favorited,
        } = outcome
        {
            self.is_favorited = !*was_favorited;
            self.likes_count = if *was_favorited {
                self.likes_count.saturating_sub(1)
            } else {
                self.likes_count.saturating_add(1)
            };
        }
    }
}

/// Send a prepared toggle and report how it ended.
pub async fn send_toggle<A>(api: &A, request: &ToggleRequest) -> ToggleOutcome
where
    A: ArticleApi + ?Sized,
{
    tracing::debug!(slug = %request.slug, favorited = request.desired(), "toggling favorite");
    match api
        .set_favorite(&request.token, &request.slug, request.desired())
        .await
    {
        Ok(_) => ToggleOutcome::Confirmed {
            was_favorited: request.was_favorited,
        },
        Err(err) => {
            tracing::error!(slug = %request.slug, error = %err, "favorite toggle failed");
            ToggleOutcome::Failed(err)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::StaticSession,
        testing::{sample_article, MockApi},
    };

    fn shadow(is_favorited: bool, likes_count: u32) -> FavoriteShadow {
        FavoriteShadow {
            is_favorited,
            likes_count,
            pending: false,
        }
    }

    async fn toggle(api: &MockApi, session: &StaticSession, state: &mut FavoriteShadow) {
        let Some(request) = state.prepare(session, "slug") else {
            return;
        };
        state.begin();
        let outcome = send_toggle(api, &request).await;
        state.settle(&outcome);
    }

    #[tokio::test]
    async fn favoriting_adds_one_like() {
        let api = MockApi::new();
        let session = StaticSession::signed_in("alice", "tok");
        let mut state = shadow(false, 7);

        toggle(&api, &session, &mut state).await;

        assert_eq!(state, shadow(true, 8));
        assert_eq!(api.calls(), vec!["favorite slug true tok".to_string()]);
    }

    #[tokio::test]
    async fn unfavoriting_removes_one_like() {
        let api = MockApi::new();
        let session = StaticSession::signed_in("alice", "tok");
        let mut state = shadow(true, 7);

        toggle(&api, &session, &mut state).await;

        assert_eq!(state, shadow(false, 6));
        assert_eq!(api.calls(), vec!["favorite slug false tok".to_string()]);
    }

    #[tokio::test]
    async fn without_token_nothing_is_sent() {
        let api = MockApi::new();
        let mut state = shadow(false, 3);

        toggle(&api, &StaticSession::anonymous(), &mut state).await;

        assert_eq!(state, shadow(false, 3));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn rejected_toggle_leaves_state_untouched() {
        let api = MockApi::new();
        api.fail_favorite(ApiError::Network("offline".to_string()));
        let session = StaticSession::signed_in("alice", "tok");
        let mut state = shadow(true, 4);

        toggle(&api, &session, &mut state).await;

        assert_eq!(state, shadow(true, 4));
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn outstanding_toggle_blocks_another() {
        let session = StaticSession::signed_in("alice", "tok");
        let mut state = shadow(false, 0);
        assert!(state.prepare(&session, "slug").is_some());
        state.begin();
        assert!(state.prepare(&session, "slug").is_none());
    }

    #[test]
    fn unfavoriting_at_zero_does_not_underflow() {
        let mut state = shadow(true, 0);
        state.settle(&ToggleOutcome::Confirmed {
            was_favorited: true,
        });
        assert_eq!(state, shadow(false, 0));
    }

    #[test]
    fn sync_replaces_values_from_new_snapshot() {
        let mut state = shadow(true, 99);
        let mut article = sample_article("slug", "bob");
        article.favorited = false;
        article.favorites_count = 2;
        state.sync(&article);
        assert_eq!(state, shadow(false, 2));
    }
}
