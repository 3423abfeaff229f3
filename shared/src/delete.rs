//! Two-step delete: confirm, send, then leave the page exactly once.

use crate::{
    api::{ArticleApi, SessionSource},
    error::ApiError,
    routes::ARTICLES,
};

/// Where the delete interaction currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeletePhase {
    /// Nothing asked yet.
    #[default]
    Idle,
    /// The yes/no prompt is open.
    Confirming,
    /// The request is in flight.
    Pending,
    /// The server deleted the article.
    Deleted,
    /// The last attempt failed.
    Failed(ApiError),
}

/// A confirmed delete ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    /// Token of the owning user.
    pub token: String,
    /// Article to delete.
    pub slug: String,
}

/// Delete interaction plus the one-shot navigation it triggers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteFlow {
    phase: DeletePhase,
    navigated: bool,
}

impl DeleteFlow {
    /// Current phase.
    pub fn phase(&self) -> &DeletePhase {
        &self.phase
    }

    /// Whether the confirmation prompt is open.
    pub fn is_confirming(&self) -> bool {
        self.phase == DeletePhase::Confirming
    }

    /// Whether a request is in flight.
    pub fn is_pending(&self) -> bool {
        self.phase == DeletePhase::Pending
    }

    /// The last failure, if the latest attempt failed.
    pub fn error(&self) -> Option<&ApiError> {
        match &self.phase {
            DeletePhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Open the confirmation prompt.
    pub fn prompt(&mut self) {
        if matches!(self.phase, DeletePhase::Idle | DeletePhase::Failed(_)) {
            self.phase = DeletePhase::Confirming;
        }
    }

    /// The user answered "No": close the prompt, send nothing.
    pub fn decline(&mut self) {
        if self.is_confirming() {
            self.phase = DeletePhase::Idle;
        }
    }

    /// The user answered "Yes": move to `Pending` once the request is known to
    /// be sendable.
    pub fn begin(&mut self) {
        if self.is_confirming() {
            self.phase = DeletePhase::Pending;
        }
    }

    /// Record the request result.
    pub fn settle(&mut self, result: Result<(), ApiError>) {
        self.phase = match result {
            Ok(()) => DeletePhase::Deleted,
            Err(err) => DeletePhase::Failed(err),
        };
    }

    /// Navigation owed after a successful delete, until it has been consumed.
    pub fn pending_navigation(&self) -> Option<&'static str> {
        (self.phase == DeletePhase::Deleted && !self.navigated).then_some(ARTICLES)
    }

    /// Take the owed navigation; later calls return `None`.
    pub fn take_navigation(&mut self) -> Option<&'static str> {
        let target = self.pending_navigation()?;
        self.navigated = true;
        Some(target)
    }
}

/// Build the request for a confirmed delete.
pub fn delete_request<S>(session: &S, slug: &str) -> Result<DeleteRequest, ApiError>
where
    S: SessionSource + ?Sized,
{
    let token = session.auth_token().ok_or(ApiError::MissingToken)?;
    Ok(DeleteRequest {
        token: token.to_string(),
        slug: slug.to_string(),
    })
}

/// Send a confirmed delete.
pub async fn send_delete<A>(api: &A, request: &DeleteRequest) -> Result<(), ApiError>
where
    A: ArticleApi + ?Sized,
{
    tracing::debug!(slug = %request.slug, "deleting article");
    api.delete_article(&request.token, &request.slug)
        .await
        .inspect_err(|err| {
            tracing::error!(slug = %request.slug, error = %err, "article delete failed");
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::StaticSession, testing::MockApi};

    #[tokio::test]
    async fn confirmed_delete_navigates_once() {
        let api = MockApi::new();
        let session = StaticSession::signed_in("alice", "tok");
        let mut flow = DeleteFlow::default();

        flow.prompt();
        let request = delete_request(&session, "my-post").expect("token present");
        flow.begin();
        assert!(flow.is_pending());
        flow.settle(send_delete(&api, &request).await);

        assert_eq!(flow.take_navigation(), Some("/articles"));
        assert_eq!(flow.take_navigation(), None);
        assert_eq!(api.calls(), vec!["delete my-post tok".to_string()]);
    }

    #[test]
    fn declining_sends_nothing_and_navigates_nowhere() {
        let mut flow = DeleteFlow::default();
        flow.prompt();
        assert!(flow.is_confirming());
        flow.decline();
        assert_eq!(flow.phase(), &DeletePhase::Idle);
        assert_eq!(flow.pending_navigation(), None);
    }

    #[tokio::test]
    async fn failed_delete_keeps_the_page_and_reports() {
        let api = MockApi::new();
        api.fail_delete(ApiError::Unauthorized);
        let session = StaticSession::signed_in("alice", "tok");
        let mut flow = DeleteFlow::default();

        flow.prompt();
        let request = delete_request(&session, "my-post").expect("token present");
        flow.begin();
        flow.settle(send_delete(&api, &request).await);

        assert_eq!(flow.error(), Some(&ApiError::Unauthorized));
        assert_eq!(flow.take_navigation(), None);
        flow.prompt();
        assert!(flow.is_confirming());
    }

    #[test]
    fn missing_token_is_reported_before_sending() {
        assert_eq!(
            delete_request(&StaticSession::anonymous(), "my-post"),
            Err(ApiError::MissingToken)
        );
    }

    #[test]
    fn begin_without_prompt_is_ignored() {
        let mut flow = DeleteFlow::default();
        flow.begin();
        assert_eq!(flow.phase(), &DeletePhase::Idle);
    }
}
