use std::rc::Rc;

use async_trait::async_trait;
#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(not(feature = "mock"))]
use js_sys::Date;
#[cfg(not(feature = "mock"))]
use post_viewer_shared::{ArticleEnvelope, UserEnvelope};
use post_viewer_shared::{ApiError, Article, ArticleApi, SessionUser};
use yew::prelude::*;

#[cfg(not(feature = "mock"))]
use crate::config::API_BASE;
#[cfg(feature = "mock")]
use crate::models::MockStore;

/// Remote client handed to components through context.
#[derive(Clone)]
pub struct ApiClient(pub Rc<dyn ArticleApi>);

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ApiClient {
    /// Client for the current build: HTTP, or the in-memory store under `mock`.
    pub fn for_build() -> Self {
        #[cfg(feature = "mock")]
        {
            Self(Rc::new(MockArticleApi::default()))
        }

        #[cfg(not(feature = "mock"))]
        {
            Self(Rc::new(HttpArticleApi::new(API_BASE)))
        }
    }
}

/// The client provided by the nearest `ContextProvider<ApiClient>`, or the
/// build default.
#[hook]
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::for_build)
}

/// `ArticleApi` over a RealWorld-style REST API.
#[cfg(not(feature = "mock"))]
pub struct HttpArticleApi {
    base: String,
}

#[cfg(not(feature = "mock"))]
impl HttpArticleApi {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn article_url(&self, slug: &str) -> String {
        format!("{}/articles/{}", self.base, urlencoding::encode(slug))
    }
}

#[cfg(not(feature = "mock"))]
fn with_token(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Token {token}"))
}

#[cfg(not(feature = "mock"))]
async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body, &status_text))
}

#[cfg(not(feature = "mock"))]
#[async_trait(?Send)]
impl ArticleApi for HttpArticleApi {
    async fn fetch_article(&self, slug: &str) -> Result<Option<Article>, ApiError> {
        let url = format!("{}?_ts={}", self.article_url(slug), Date::now() as u64);
        let request = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache");

        let response = match send(request).await {
            Ok(response) => response,
            Err(ApiError::Status {
                status: 404,
                ..
            }) => return Ok(None),
            Err(err) => return Err(err),
        };

        let envelope: ArticleEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
        Ok(envelope.article)
    }

    async fn delete_article(&self, token: &str, slug: &str) -> Result<(), ApiError> {
        let request = with_token(Request::delete(&self.article_url(slug)), token);
        send(request).await.map(|_| ())
    }

    async fn set_favorite(
        &self,
        token: &str,
        slug: &str,
        favorited: bool,
    ) -> Result<Article, ApiError> {
        let url = format!("{}/favorite", self.article_url(slug));
        let request = if favorited { Request::post(&url) } else { Request::delete(&url) };
        let response = send(with_token(request, token)).await?;

        let envelope: ArticleEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
        envelope
            .article
            .ok_or_else(|| ApiError::Decode("response carries no article".to_string()))
    }

    async fn current_user(&self, token: &str) -> Result<SessionUser, ApiError> {
        let request = with_token(Request::get(&format!("{}/user", self.base)), token);
        let response = send(request).await?;

        let envelope: UserEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
        Ok(envelope.user)
    }
}

/// `ArticleApi` over the in-memory sample data used by the demo build.
#[cfg(feature = "mock")]
#[derive(Default)]
pub struct MockArticleApi {
    store: MockStore,
}

#[cfg(feature = "mock")]
#[async_trait(?Send)]
impl ArticleApi for MockArticleApi {
    async fn fetch_article(&self, slug: &str) -> Result<Option<Article>, ApiError> {
        Ok(self.store.article(slug))
    }

    async fn delete_article(&self, token: &str, slug: &str) -> Result<(), ApiError> {
        let user = self.store.user(token).ok_or(ApiError::Unauthorized)?;
        self.store.remove(&user.username, slug)
    }

    async fn set_favorite(
        &self,
        token: &str,
        slug: &str,
        favorited: bool,
    ) -> Result<Article, ApiError> {
        self.store.user(token).ok_or(ApiError::Unauthorized)?;
        self.store.set_favorite(slug, favorited)
    }

    async fn current_user(&self, token: &str) -> Result<SessionUser, ApiError> {
        self.store.user(token).ok_or(ApiError::Unauthorized)
    }
}
