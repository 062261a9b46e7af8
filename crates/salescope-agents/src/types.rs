//! Responder kinds and reply shapes.

/// The closed set of responder roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Manager,
    Sales,
    Analytics,
    Support,
    LeadQualification,
    CustomerManagement,
}

impl AgentKind {
    pub const ALL: [AgentKind; 6] = [
        AgentKind::Manager,
        AgentKind::Sales,
        AgentKind::Analytics,
        AgentKind::Support,
        AgentKind::LeadQualification,
        AgentKind::CustomerManagement,
    ];

    /// Resolve a role tag to a kind.
    ///
    /// Unknown (or empty) tags resolve to the manager. That fallback is a
    /// deliberate part of the dispatch contract, not an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "manager" => AgentKind::Manager,
            "sales" => AgentKind::Sales,
            "analytics" => AgentKind::Analytics,
            "support" => AgentKind::Support,
            "lead_qualification" => AgentKind::LeadQualification,
            "customer_management" => AgentKind::CustomerManagement,
            _ => AgentKind::Manager,
        }
    }

    /// The canonical tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Manager => "manager",
            AgentKind::Sales => "sales",
            AgentKind::Analytics => "analytics",
            AgentKind::Support => "support",
            AgentKind::LeadQualification => "lead_qualification",
            AgentKind::CustomerManagement => "customer_management",
        }
    }
}

/// A responder's reply: text, zero or more chart data-URIs, and an
/// optional labeled series for tabular display.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReply {
    pub text: String,
    pub charts: Vec<String>,
    pub data: Option<Vec<(String, f64)>>,
}

impl AgentReply {
    /// A plain-text reply with no charts or data.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            charts: Vec::new(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip() {
        for kind in AgentKind::ALL {
            assert_eq!(AgentKind::from_tag(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_manager() {
        assert_eq!(AgentKind::from_tag("nonexistent"), AgentKind::Manager);
        assert_eq!(AgentKind::from_tag(""), AgentKind::Manager);
        assert_eq!(AgentKind::from_tag("MANAGER"), AgentKind::Manager);
        assert_eq!(AgentKind::from_tag("Analytics"), AgentKind::Manager);
    }

    #[test]
    fn test_text_reply_is_bare() {
        let reply = AgentReply::text("hello");
        assert_eq!(reply.text, "hello");
        assert!(reply.charts.is_empty());
        assert!(reply.data.is_none());
    }
}
