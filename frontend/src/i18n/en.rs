pub mod common {
    pub const APP_NAME: &str = "Post Viewer";
    pub const LOADING: &str = "Loading...";
}

pub mod header {
    pub const ARTICLES: &str = "Articles";
    pub const SIGN_IN: &str = "Sign in";
    pub const SIGNED_IN_AS_TEMPLATE: &str = "Signed in as {}";
}

pub mod loading_spinner {
    pub const ARIA_LABEL: &str = "Loading";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const ARIA_CLOSE: &str = "Dismiss";
}

pub mod post_detail {
    pub const NOT_FOUND: &str = "Post Not Found";
    pub const LOAD_FAILED: &str = "Could not load this post";
    pub const DELETE: &str = "Delete";
    pub const EDIT: &str = "Edit";
    pub const DELETE_CONFIRM_TITLE: &str = "Are you sure to delete this post?";
    pub const CONFIRM_YES: &str = "Yes";
    pub const CONFIRM_NO: &str = "No";
    pub const NOTICE_YES: &str = "Click on Yes";
    pub const NOTICE_NO: &str = "Click on No";
    pub const AVATAR_ALT: &str = "Avatar";
    pub const ARIA_LIKE: &str = "Favorite this post";
    pub const ARIA_UNLIKE: &str = "Remove from favorites";
    pub const ARIA_TAGS: &str = "Tags";
}

pub mod require_auth {
    pub const CHECKING: &str = "Checking your session...";
}

pub mod sign_in_page {
    pub const TITLE: &str = "Sign in required";
    pub const DESCRIPTION: &str =
        "Signing in is handled by the identity service. Come back once you have a session.";
    pub const RETURN_TEMPLATE: &str = "You will be returned to {} afterwards.";
    pub const RETURN_LINK: &str = "Try again";
}

pub mod articles_page {
    pub const TITLE: &str = "Articles";
    pub const DESCRIPTION: &str = "The article feed is served by the main application.";
}

pub mod edit_page {
    pub const TITLE_TEMPLATE: &str = "Editing {}";
    pub const DESCRIPTION: &str = "The editor is served by the main application.";
    pub const BACK: &str = "Back to the post";
}

pub mod not_found_page {
    pub const TITLE: &str = "404 - Page not found";
    pub const DESCRIPTION: &str = "Sorry, the page you are looking for does not exist.";
}
