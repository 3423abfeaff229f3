//! Decision behind the `RequireAuth` wrapper.

use crate::routes::SIGN_IN;

/// What a protected route should do for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected children unchanged.
    Render,
    /// Send the visitor to sign-in and remember where they were going.
    Redirect {
        /// Sign-in path.
        to: &'static str,
        /// Location to return to after signing in.
        from: String,
    },
}

/// Decide whether `location` may be rendered.
pub fn guard(is_logged_in: bool, location: &str) -> GuardDecision {
    if is_logged_in {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect {
            to: SIGN_IN,
            from: location.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_visitors_are_redirected_with_return_target() {
        assert_eq!(
            guard(false, "/foo"),
            GuardDecision::Redirect {
                to: "/sign-in",
                from: "/foo".to_string(),
            }
        );
    }

    #[test]
    fn signed_in_visitors_pass_through() {
        assert_eq!(guard(true, "/foo"), GuardDecision::Render);
    }
}
