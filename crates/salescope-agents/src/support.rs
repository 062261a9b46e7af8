//! Support responder: static guidance, available with or without a store.

use std::collections::HashMap;

use salescope_storage::Database;

use crate::error::AgentError;
use crate::responder::Responder;
use crate::types::{AgentKind, AgentReply};

pub struct SupportAgent;

impl Responder for SupportAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Support
    }

    fn process(
        &self,
        query: &str,
        _context: Option<&HashMap<String, String>>,
        _db: Option<&Database>,
    ) -> Result<AgentReply, AgentError> {
        Ok(AgentReply::text(format!(
            "**Support Assistance**\n\
             \n\
             I'm here to help with any technical issues or questions about the sales system.\n\
             \n\
             Common Support Topics:\n\
             - System navigation and features\n\
             - Data interpretation and analysis\n\
             - Agent selection and usage\n\
             - Chart and visualization questions\n\
             - Performance tracking guidance\n\
             \n\
             Your Query: {query}\n\
             \n\
             I can assist with technical support, system guidance, and help you navigate \
             the sales management platform effectively. Please let me know what specific \
             assistance you need!\n\
             \n\
             For complex analytics or data visualization, I recommend using the Analytics Agent.\n\
             For sales-specific questions, the Sales Agent would be most helpful.",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_works_without_db() {
        let reply = SupportAgent
            .process("how do I reset my view", None, None)
            .unwrap();
        assert!(reply.text.contains("Support Assistance"));
        assert!(reply.text.contains("how do I reset my view"));
    }

    #[test]
    fn test_echoes_query_with_db() {
        let db = Database::in_memory().unwrap();
        let reply = SupportAgent
            .process("where are the charts", None, Some(&db))
            .unwrap();
        assert!(reply.text.contains("where are the charts"));
    }
}
