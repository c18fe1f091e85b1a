//! Article workflow - pure state transitions.
//!
//! The transition table is a pure decision maker: no IO, no async. Actions
//! validate a transition here BEFORE touching the store, so an invalid
//! attempt fails without any partial state change.
//!
//! ```text
//! bozza --submit_for_review--> in_revisione --approve--> approvato
//!                                  |
//!                                  +--reject--> rifiutato --submit_for_review--> in_revisione
//! ```
//!
//! `pubblicato` is reachable only through an external publishing step and has
//! no outgoing transitions here.

use crate::common::CoreError;

use super::models::ArticleStatus;

/// An action on the article state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowAction {
    SubmitForReview,
    Approve,
    Reject,
}

impl std::fmt::Display for WorkflowAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowAction::SubmitForReview => write!(f, "submit_for_review"),
            WorkflowAction::Approve => write!(f, "approve"),
            WorkflowAction::Reject => write!(f, "reject"),
        }
    }
}

/// Apply a workflow action to a status, yielding the next status.
///
/// Any pair outside the transition table fails with
/// [`CoreError::InvalidTransition`] and must leave the article untouched.
pub fn apply(from: ArticleStatus, action: WorkflowAction) -> Result<ArticleStatus, CoreError> {
    use ArticleStatus::*;
    use WorkflowAction::*;

    match (from, action) {
        (Bozza, SubmitForReview) => Ok(InRevisione),
        // Resubmission after a rejection re-enters review
        (Rifiutato, SubmitForReview) => Ok(InRevisione),
        (InRevisione, Approve) => Ok(Approvato),
        (InRevisione, Reject) => Ok(Rifiutato),
        (from, action) => Err(CoreError::InvalidTransition {
            from: from.to_string(),
            action: action.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        assert_eq!(
            apply(ArticleStatus::Bozza, WorkflowAction::SubmitForReview).unwrap(),
            ArticleStatus::InRevisione
        );
        assert_eq!(
            apply(ArticleStatus::InRevisione, WorkflowAction::Approve).unwrap(),
            ArticleStatus::Approvato
        );
        assert_eq!(
            apply(ArticleStatus::InRevisione, WorkflowAction::Reject).unwrap(),
            ArticleStatus::Rifiutato
        );
        assert_eq!(
            apply(ArticleStatus::Rifiutato, WorkflowAction::SubmitForReview).unwrap(),
            ArticleStatus::InRevisione
        );
    }

    #[test]
    fn test_approve_from_draft_is_invalid() {
        let result = apply(ArticleStatus::Bozza, WorkflowAction::Approve);
        assert!(matches!(
            result,
            Err(CoreError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_terminal_states_have_no_review_transitions() {
        for status in [ArticleStatus::Approvato, ArticleStatus::Pubblicato] {
            for action in [
                WorkflowAction::SubmitForReview,
                WorkflowAction::Approve,
                WorkflowAction::Reject,
            ] {
                assert!(
                    apply(status, action).is_err(),
                    "{status} should not accept {action}"
                );
            }
        }
    }

    #[test]
    fn test_double_submit_is_invalid() {
        let in_review = apply(ArticleStatus::Bozza, WorkflowAction::SubmitForReview).unwrap();
        assert!(apply(in_review, WorkflowAction::SubmitForReview).is_err());
    }
}
