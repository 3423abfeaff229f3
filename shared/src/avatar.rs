//! Author avatar with a one-shot fallback to the bundled default image.

/// Image source for the author avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarSource {
    primary: Option<String>,
    fallback: String,
    failed: bool,
}

impl AvatarSource {
    /// Avatar for `primary`, falling back to `fallback`. Blank URLs count as
    /// missing.
    pub fn new(primary: Option<&str>, fallback: &str) -> Self {
        Self {
            primary: primary
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            fallback: fallback.to_string(),
            failed: false,
        }
    }

    /// URL to put in `src`.
    pub fn src(&self) -> &str {
        match (&self.primary, self.failed) {
            (Some(url), false) => url,
            _ => &self.fallback,
        }
    }

    /// The image failed to load. Returns whether `src` changed; once the
    /// fallback is showing, further errors are ignored.
    pub fn mark_failed(&mut self) -> bool {
        if self.failed || self.primary.is_none() {
            return false;
        }
        self.failed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::AvatarSource;

    #[test]
    fn swaps_to_default_once() {
        let mut avatar = AvatarSource::new(Some("https://cdn/a.png"), "/static/avatar.svg");
        assert_eq!(avatar.src(), "https://cdn/a.png");
        assert!(avatar.mark_failed());
        assert_eq!(avatar.src(), "/static/avatar.svg");
        assert!(!avatar.mark_failed());
    }

    #[test]
    fn missing_url_uses_default_directly() {
        let mut avatar = AvatarSource::new(Some("  "), "/static/avatar.svg");
        assert_eq!(avatar.src(), "/static/avatar.svg");
        assert!(!avatar.mark_failed());
    }
}
