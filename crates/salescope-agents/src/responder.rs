//! Responder trait, dispatch, and the error-absorbing boundary.

use std::collections::HashMap;

use tracing::error;

use salescope_storage::Database;

use crate::analytics::AnalyticsAgent;
use crate::customers::CustomerManagementAgent;
use crate::error::AgentError;
use crate::leads::LeadQualificationAgent;
use crate::manager::ManagerAgent;
use crate::sales::SalesAgent;
use crate::support::SupportAgent;
use crate::types::{AgentKind, AgentReply};

/// Reply used when a responder fails internally. Callers never see the
/// underlying error.
const APOLOGY: &str =
    "I ran into a problem while processing your request. Please try again.";

/// A role-specific query handler.
///
/// `context` is an optional key/value map supplied by the caller; most
/// responders ignore it. `db` may be absent, in which case the responder
/// must degrade to static content rather than fail.
pub trait Responder: Send + Sync {
    fn kind(&self) -> AgentKind;

    fn process(
        &self,
        query: &str,
        context: Option<&HashMap<String, String>>,
        db: Option<&Database>,
    ) -> Result<AgentReply, AgentError>;
}

/// Construct the responder for a kind. The match is exhaustive; unknown
/// role *tags* have already been folded into `Manager` by
/// [`AgentKind::from_tag`].
pub fn responder_for(kind: AgentKind) -> Box<dyn Responder> {
    match kind {
        AgentKind::Manager => Box::new(ManagerAgent),
        AgentKind::Sales => Box::new(SalesAgent),
        AgentKind::Analytics => Box::new(AnalyticsAgent::new()),
        AgentKind::Support => Box::new(SupportAgent),
        AgentKind::LeadQualification => Box::new(LeadQualificationAgent),
        AgentKind::CustomerManagement => Box::new(CustomerManagementAgent),
    }
}

/// Dispatch a query to a responder and absorb any failure.
///
/// This is the responder boundary of the error-handling contract: an
/// `Err` from `process` is logged and replaced with an apology reply.
pub fn respond(kind: AgentKind, query: &str, db: Option<&Database>) -> AgentReply {
    let responder = responder_for(kind);
    match responder.process(query, None, db) {
        Ok(reply) => reply,
        Err(e) => {
            error!(agent = kind.as_str(), error = %e, "Responder failed");
            AgentReply::text(APOLOGY)
        }
    }
}

/// True if the (already lowercased) query contains any of the words.
pub(crate) fn contains_any(query_lower: &str, words: &[&str]) -> bool {
    words.iter().any(|word| query_lower.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any() {
        assert!(contains_any("show me a chart", &["chart", "graph"]));
        assert!(!contains_any("hello there", &["chart", "graph"]));
        assert!(contains_any("showcase", &["show"])); // substring, not word-boundary
    }

    #[test]
    fn test_responder_for_reports_its_kind() {
        for kind in AgentKind::ALL {
            assert_eq!(responder_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_respond_without_db_never_empty() {
        for kind in AgentKind::ALL {
            let reply = respond(kind, "hello", None);
            assert!(!reply.text.is_empty(), "empty reply from {:?}", kind);
        }
    }

    #[test]
    fn test_unknown_tag_dispatches_to_manager() {
        let kind = AgentKind::from_tag("no_such_agent");
        let reply = respond(kind, "hello", None);
        assert_eq!(kind, AgentKind::Manager);
        assert!(!reply.text.is_empty());
    }
}
