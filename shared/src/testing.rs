//! In-memory `ArticleApi` double that records every call.

use std::{cell::RefCell, collections::HashMap};

use async_trait::async_trait;

use crate::{
    api::ArticleApi,
    error::ApiError,
    models::{Article, Profile, SessionUser},
};

pub fn sample_article(slug: &str, author: &str) -> Article {
    Article {
        slug: slug.to_string(),
        title: "How to train your dragon".to_string(),
        description: "Ever wonder how?".to_string(),
        body: "It takes a *Jacobian*".to_string(),
        tag_list: vec!["".to_string(), "  ".to_string(), "go".to_string(), "react".to_string()],
        created_at: Some("2023-05-01T12:00:00.000Z".to_string()),
        updated_at: None,
        favorited: false,
        favorites_count: 5,
        author: Profile {
            username: author.to_string(),
            image: Some("https://example.com/avatar.png".to_string()),
            bio: None,
            following: false,
        },
    }
}

#[derive(Default)]
pub struct MockApi {
    articles: RefCell<HashMap<String, Article>>,
    calls: RefCell<Vec<String>>,
    fetch_error: RefCell<Option<ApiError>>,
    favorite_error: RefCell<Option<ApiError>>,
    delete_error: RefCell<Option<ApiError>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_article(article: Article) -> Self {
        let api = Self::new();
        api.add_article(article);
        api
    }

    pub fn add_article(&self, article: Article) {
        self.articles
            .borrow_mut()
            .insert(article.slug.clone(), article);
    }

    pub fn fail_fetch(&self, err: ApiError) {
        *self.fetch_error.borrow_mut() = Some(err);
    }

    pub fn fail_favorite(&self, err: ApiError) {
        *self.favorite_error.borrow_mut() = Some(err);
    }

    pub fn fail_delete(&self, err: ApiError) {
        *self.delete_error.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl ArticleApi for MockApi {
    async fn fetch_article(&self, slug: &str) -> Result<Option<Article>, ApiError> {
        self.record(format!("fetch {slug}"));
        if let Some(err) = self.fetch_error.borrow().clone() {
            return Err(err);
        }
        Ok(self.articles.borrow().get(slug).cloned())
    }

    async fn delete_article(&self, token: &str, slug: &str) -> Result<(), ApiError> {
        self.record(format!("delete {slug} {token}"));
        if let Some(err) = self.delete_error.borrow().clone() {
            return Err(err);
        }
        self.articles.borrow_mut().remove(slug);
        Ok(())
    }

    async fn set_favorite(
        &self,
        token: &str,
        slug: &str,
        favorited: bool,
    ) -> Result<Article, ApiError> {
        self.record(format!("favorite {slug} {favorited} {token}"));
        if let Some(err) = self.favorite_error.borrow().clone() {
            return Err(err);
        }
        let mut articles = self.articles.borrow_mut();
        let article = articles
            .entry(slug.to_string())
            .or_insert_with(|| sample_article(slug, "someone"));
        if article.favorited != favorited {
            article.favorited = favorited;
            article.favorites_count = if favorited {
                article.favorites_count + 1
            } else {
                article.favorites_count.saturating_sub(1)
            };
        }
        Ok(article.clone())
    }

    async fn current_user(&self, token: &str) -> Result<SessionUser, ApiError> {
        self.record(format!("user {token}"));
        Err(ApiError::Unauthorized)
    }
}
