use super::domain::AlertSeverity;
use super::facts::CaseFacts;
use serde::{Deserialize, Serialize};

/// Standalone notice raised independently of the risk level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseAlert {
    pub severity: AlertSeverity,
    pub text: String,
}

/// Four independent guards in fixed generation order; guards are not
/// mutually exclusive, so one case can raise several alerts.
pub(crate) fn build_alerts(facts: &CaseFacts) -> Vec<CaseAlert> {
    let mut alerts = Vec::new();

    if facts.new_owner_blacklisted {
        alerts.push(CaseAlert {
            severity: AlertSeverity::Critical,
            text: "New owner is on the collections blacklist; do not extend service without a compliance review.".to_string(),
        });
    }

    if facts.old_owner_blacklisted {
        alerts.push(CaseAlert {
            severity: AlertSeverity::Warning,
            text: "Old owner is on the collections blacklist; expect difficulty collecting any remaining balance.".to_string(),
        });
    }

    if facts.bad_debt {
        alerts.push(CaseAlert {
            severity: AlertSeverity::Warning,
            text: "Account already has a bad-debt file in collections.".to_string(),
        });
    }

    if facts.distress_confirmed {
        alerts.push(CaseAlert {
            severity: AlertSeverity::Warning,
            text: "Financial distress reported for the responsible party.".to_string(),
        });
    }

    alerts
}
