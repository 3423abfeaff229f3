//! Literal navigation targets used by the post-detail page and the guard.

/// Article listing; the destination after a successful delete.
pub const ARTICLES: &str = "/articles";

/// Sign-in page; the destination of the auth guard.
pub const SIGN_IN: &str = "/sign-in";

/// Post-detail path for `slug`.
pub fn article_path(slug: &str) -> String {
    format!("{ARTICLES}/{slug}")
}

/// Editor path for `slug`.
pub fn edit_path(slug: &str) -> String {
    format!("{ARTICLES}/{slug}/edit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_article_paths() {
        assert_eq!(article_path("hello-world"), "/articles/hello-world");
        assert_eq!(edit_path("hello-world"), "/articles/hello-world/edit");
    }
}
