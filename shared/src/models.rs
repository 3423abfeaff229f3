//! Wire-level data model of the article API.

use serde::{Deserialize, Serialize};

/// Public profile of an article author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique username, compared case-sensitively for ownership.
    pub username: String,
    /// Avatar image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Free-form biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Whether the viewer follows this author.
    #[serde(default)]
    pub following: bool,
}

/// Full article snapshot as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique human-readable identifier used in URLs.
    pub slug: String,
    /// Headline.
    pub title: String,
    /// Short lead paragraph.
    #[serde(default)]
    pub description: String,
    /// Markdown body.
    #[serde(default)]
    pub body: String,
    /// Tags in author order; may contain blank entries.
    #[serde(default)]
    pub tag_list: Vec<String>,
    /// Creation timestamp, `yyyy-MM-ddTHH:mm:ss.SSSZ`.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last modification timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Whether the viewer has favorited this article.
    #[serde(default)]
    pub favorited: bool,
    /// Number of users who favorited this article.
    #[serde(default)]
    pub favorites_count: u32,
    /// Author profile.
    pub author: Profile,
}

/// `{ "article": ... }` wrapper. A missing member means the article was not
/// found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleEnvelope {
    /// The wrapped article, if any.
    #[serde(default)]
    pub article: Option<Article>,
}

/// The authenticated user as returned by `GET /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique username.
    pub username: String,
    /// Account email.
    #[serde(default)]
    pub email: String,
    /// Token issued for this session.
    #[serde(default)]
    pub token: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Free-form biography.
    #[serde(default)]
    pub bio: Option<String>,
}

/// `{ "user": ... }` wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEnvelope {
    /// The wrapped user.
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_envelope_reads_camel_case_fields() {
        let raw = r#"{
            "article": {
                "slug": "how-to-train-your-dragon",
                "title": "How to train your dragon",
                "description": "Ever wonder how?",
                "body": "It takes a Jacobian",
                "tagList": ["dragons", "training"],
                "createdAt": "2016-02-18T03:22:56.637Z",
                "updatedAt": "2016-02-18T03:48:35.824Z",
                "favorited": false,
                "favoritesCount": 3,
                "author": {
                    "username": "jake",
                    "bio": "I work at statefarm",
                    "image": "https://i.stack.imgur.com/xHWG8.jpg",
                    "following": false
                }
            }
        }"#;

        let envelope: ArticleEnvelope = serde_json::from_str(raw).expect("decode envelope");
        let article = envelope.article.expect("article present");
        assert_eq!(article.slug, "how-to-train-your-dragon");
        assert_eq!(article.tag_list, vec!["dragons".to_string(), "training".to_string()]);
        assert_eq!(article.created_at.as_deref(), Some("2016-02-18T03:22:56.637Z"));
        assert_eq!(article.favorites_count, 3);
        assert_eq!(article.author.username, "jake");
    }

    #[test]
    fn envelope_without_article_decodes_as_none() {
        let envelope: ArticleEnvelope = serde_json::from_str("{}").expect("decode envelope");
        assert!(envelope.article.is_none());
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let raw = r#"{"slug":"s","title":"t","author":{"username":"u"}}"#;
        let article: Article = serde_json::from_str(raw).expect("decode article");
        assert!(article.tag_list.is_empty());
        assert!(article.created_at.is_none());
        assert!(!article.favorited);
        assert_eq!(article.favorites_count, 0);
        assert!(article.author.image.is_none());
    }
}
