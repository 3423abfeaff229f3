//! Sample data served by the `mock` build.

use std::{cell::RefCell, collections::BTreeMap};

use post_viewer_shared::{ApiError, Article, Profile, SessionUser};

/// Token accepted by the demo build; store it under `localStorage["token"]`
/// to act as `jake`.
pub const MOCK_TOKEN: &str = "mock-token-jake";

/// In-memory stand-in for the API server.
pub struct MockStore {
    articles: RefCell<BTreeMap<String, Article>>,
}

impl Default for MockStore {
    fn default() -> Self {
        let articles = mock_articles()
            .into_iter()
            .map(|article| (article.slug.clone(), article))
            .collect();
        Self {
            articles: RefCell::new(articles),
        }
    }
}

impl MockStore {
    pub fn article(&self, slug: &str) -> Option<Article> {
        self.articles.borrow().get(slug).cloned()
    }

    pub fn user(&self, token: &str) -> Option<SessionUser> {
        (token == MOCK_TOKEN).then(|| SessionUser {
            username: "jake".to_string(),
            email: "jake@jake.jake".to_string(),
            token: Some(MOCK_TOKEN.to_string()),
            image: None,
            bio: Some("I work at statefarm".to_string()),
        })
    }

    pub fn remove(&self, username: &str, slug: &str) -> Result<(), ApiError> {
        let mut articles = self.articles.borrow_mut();
        let owner = articles
            .get(slug)
            .map(|article| article.author.username.clone());
        match owner {
            None => Err(ApiError::Status {
                status: 404,
                detail: "article not found".to_string(),
            }),
            Some(owner) if owner != username => Err(ApiError::Unauthorized),
            Some(_) => {
                articles.remove(slug);
                Ok(())
            },
        }
    }

    pub fn set_favorite(&self, slug: &str, favorited: bool) -> Result<Article, ApiError> {
        let mut articles = self.articles.borrow_mut();
        let article = articles.get_mut(slug).ok_or_else(|| ApiError::Status {
            status: 404,
            detail: "article not found".to_string(),
        })?;
        if article.favorited != favorited {
            article.favorited = favorited;
            article.favorites_count = if favorited {
                article.favorites_count.saturating_add(1)
            } else {
                article.favorites_count.saturating_sub(1)
            };
        }
        Ok(article.clone())
    }
}

// 内部函数：构建示例文章
fn mock_articles() -> Vec<Article> {
    let authors = [
        ("jake", Some("https://api.realworld.io/images/smiley-cyrus.jpeg")),
        ("amy", Some("https://example.invalid/broken-avatar.png")),
        ("carol", None),
    ];

    let mut items = Vec::new();
    for i in 1..=6 {
        let (username, image) = authors[(i as usize) % authors.len()];
        let tag_list = match i % 3 {
            0 => vec!["rust".to_string(), "".to_string(), "wasm".to_string()],
            1 => vec!["  ".to_string(), "yew".to_string(), "yew".to_string()],
            _ => Vec::new(),
        };
        let created_at = if i == 6 {
            None
        } else {
            Some(format!("2023-{:02}-{:02}T12:00:00.000Z", i, 10 + i))
        };

        items.push(Article {
            slug: format!("sample-post-{i}"),
            title: format!("Sample post {i}"),
            description: format!("A short lead paragraph for sample post {i}."),
            body: format!(
                "# Sample post {i}\n\nThis body is **Markdown**.\n\n- first point\n- second \
                 point\n\n```rust\nfn main() {{\n    println!(\"post {i}\");\n}}\n```\n"
            ),
            tag_list,
            created_at,
            updated_at: None,
            favorited: i % 2 == 0,
            favorites_count: i * 3,
            author: Profile {
                username: username.to_string(),
                image: image.map(str::to_string),
                bio: None,
                following: false,
            },
        });
    }
    items
}
