//! State of the post-detail page and what it renders.
//!
//! The page is driven by [`PostDetailAction`]s: the fetch effect, the favorite
//! toggle and the delete flow each dispatch their own actions, and
//! [`PostDetailState::view`] turns the result into a [`DetailView`].

use crate::{
    api::SessionSource,
    delete::DeleteFlow,
    error::ApiError,
    favorite::{FavoriteShadow, ToggleOutcome},
    format::{display_date, visible_tags, TagLabel},
    models::{Article, SessionUser},
    query::{ArticleQuery, QueryState},
};

/// Everything that changes the post-detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostDetailAction {
    /// A fetch for `slug` was issued.
    Load {
        /// Requested slug.
        slug: String,
    },
    /// The fetch for `slug` settled.
    Loaded {
        /// Slug the response belongs to.
        slug: String,
        /// Fetch result.
        result: Result<Option<Article>, ApiError>,
    },
    /// A favorite toggle was sent.
    LikeStarted,
    /// The favorite toggle for `slug` settled.
    LikeSettled {
        /// Slug the toggle was sent for.
        slug: String,
        /// Toggle result.
        outcome: ToggleOutcome,
    },
    /// The delete button was pressed; the prompt opens.
    DeletePrompted,
    /// The prompt was answered "No".
    DeleteDeclined,
    /// The prompt was answered "Yes" and the request was sent.
    DeleteStarted,
    /// The delete request for `slug` settled.
    DeleteSettled {
        /// Slug the delete was sent for.
        slug: String,
        /// Delete result.
        result: Result<(), ApiError>,
    },
    /// The post-delete navigation has been performed.
    NavigationConsumed,
}

/// Complete state of one post-detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDetailState {
    /// Article fetch.
    pub query: ArticleQuery,
    /// Optimistic favorite shadow.
    pub favorite: FavoriteShadow,
    /// Delete interaction.
    pub delete: DeleteFlow,
}

impl PostDetailState {
    /// Apply one action.
    pub fn apply(&mut self, action: PostDetailAction) {
        match action {
            PostDetailAction::Load {
                slug,
            } => {
                self.query.start(&slug);
                self.favorite.pending = false;
                self.delete = DeleteFlow::default();
            },
            PostDetailAction::Loaded {
                slug,
                result,
            } => {
                if self.query.resolve(&slug, result) {
                    if let Some(article) = self.query.article() {
                        self.favorite.sync(article);
                    }
                }
            },
            PostDetailAction::LikeStarted => self.favorite.begin(),
            PostDetailAction::LikeSettled {
                slug,
                outcome,
            } => {
                // A toggle outlived by a `Load` belongs to an article no longer shown.
                if self.is_current(&slug) && self.favorite.pending {
                    self.favorite.settle(&outcome);
                } else {
                    tracing::warn!(%slug, "discarding stale favorite result");
                }
            },
            PostDetailAction::DeletePrompted => self.delete.prompt(),
            PostDetailAction::DeleteDeclined => self.delete.decline(),
            PostDetailAction::DeleteStarted => self.delete.begin(),
            PostDetailAction::DeleteSettled {
                slug,
                result,
            } => {
                let awaiting = self.delete.is_confirming() || self.delete.is_pending();
                if self.is_current(&slug) && awaiting {
                    self.delete.settle(result);
                } else {
                    tracing::warn!(%slug, "discarding stale delete result");
                }
            },
            PostDetailAction::NavigationConsumed => {
                self.delete.take_navigation();
            },
        }
    }

    fn is_current(&self, slug: &str) -> bool {
        self.query.slug() == Some(slug)
    }

    /// What the page shows for `session`.
    pub fn view<S>(&self, session: &S) -> DetailView
    where
        S: SessionSource + ?Sized,
    {
        match self.query.state() {
            QueryState::Idle | QueryState::Loading => DetailView::Loading,
            QueryState::Failed(err) => DetailView::Error(err.to_string()),
            QueryState::Ready(None) => DetailView::NotFound,
            QueryState::Ready(Some(article)) => DetailView::Article(Box::new(ArticleView::new(
                article,
                &self.favorite,
                &self.delete,
                session.current_user(),
            ))),
        }
    }
}

/// Top-level render decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// Spinner only.
    Loading,
    /// Error indicator with the failure detail.
    Error(String),
    /// The server has no such article.
    NotFound,
    /// Full article.
    Article(Box<ArticleView>),
}

/// Render-ready article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    /// Article slug.
    pub slug: String,
    /// Headline.
    pub title: String,
    /// Lead paragraph.
    pub description: String,
    /// Markdown body.
    pub body: String,
    /// Non-blank tags.
    pub tags: Vec<TagLabel>,
    /// Author username.
    pub author: String,
    /// Author avatar URL.
    pub avatar: Option<String>,
    /// `May 1, 2023` or the unknown-date placeholder.
    pub date: String,
    /// Shadowed favorite flag.
    pub is_favorited: bool,
    /// Shadowed favorites count.
    pub likes_count: u32,
    /// The favorite control is disabled while a toggle is in flight.
    pub like_disabled: bool,
    /// Edit/delete controls are rendered.
    pub can_manage: bool,
    /// The delete prompt is open.
    pub confirming_delete: bool,
    /// A delete is in flight.
    pub delete_pending: bool,
    /// Detail of the last failed delete.
    pub delete_error: Option<String>,
}

impl ArticleView {
    fn new(
        article: &Article,
        favorite: &FavoriteShadow,
        delete: &DeleteFlow,
        user: Option<&SessionUser>,
    ) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.title.clone(),
            description: article.description.clone(),
            body: article.body.clone(),
            tags: visible_tags(&article.tag_list),
            author: article.author.username.clone(),
            avatar: article.author.image.clone(),
            date: display_date(article.created_at.as_deref()),
            is_favorited: favorite.is_favorited,
            likes_count: favorite.likes_count,
            like_disabled: favorite.pending,
            can_manage: can_manage(user, article),
            confirming_delete: delete.is_confirming(),
            delete_pending: delete.is_pending(),
            delete_error: delete.error().map(ToString::to_string),
        }
    }
}

/// Edit/delete controls belong to the author only (exact username match).
pub fn can_manage(user: Option<&SessionUser>, article: &Article) -> bool {
    user.is_some_and(|user| user.username == article.author.username)
}
