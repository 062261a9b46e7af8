//! Manager responder: routes queries toward the right specialist and
//! answers everything else with a coordination overview.

use std::collections::HashMap;

use salescope_storage::Database;

use crate::error::AgentError;
use crate::responder::{contains_any, Responder};
use crate::types::{AgentKind, AgentReply};

pub struct ManagerAgent;

impl Responder for ManagerAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Manager
    }

    fn process(
        &self,
        query: &str,
        _context: Option<&HashMap<String, String>>,
        db: Option<&Database>,
    ) -> Result<AgentReply, AgentError> {
        if db.is_none() {
            return Ok(AgentReply::text(
                "I'm having trouble accessing the system data right now. Please try again.",
            ));
        }

        let query_lower = query.to_lowercase();

        let text = if contains_any(
            &query_lower,
            &["chart", "analytics", "report", "performance", "revenue"],
        ) {
            "For detailed analytics and charts, please switch to the Analytics Agent. \
             I can coordinate overall team management tasks."
                .to_string()
        } else if contains_any(&query_lower, &["lead", "prospect", "qualify"]) {
            "For lead qualification tasks, please use the Lead Qualification Agent. \
             I handle overall coordination."
                .to_string()
        } else if contains_any(&query_lower, &["support", "help", "issue", "problem"]) {
            "For support issues, please use the Support Agent. I coordinate team management."
                .to_string()
        } else if contains_any(&query_lower, &["customer", "client", "relationship"]) {
            "For customer management tasks, use the Customer Management Agent. \
             I handle strategic oversight."
                .to_string()
        } else {
            "As your AI Manager, I coordinate the sales team operations.\n\
             \n\
             Current Team Status:\n\
             - 6 Active salespersons across different regions\n\
             - Multiple ongoing deals and prospects\n\
             - Regular performance tracking and analytics\n\
             \n\
             Available Resources:\n\
             - Sales Agent: Direct sales support and deal management\n\
             - Analytics Agent: Performance metrics and visual reports\n\
             - Lead Qualification Agent: Prospect evaluation and scoring\n\
             - Support Agent: Technical assistance and issue resolution\n\
             - Customer Management Agent: Client relationship management\n\
             \n\
             How can I help coordinate your sales operations today?"
                .to_string()
        };

        Ok(AgentReply::text(text))
    }
}
