use super::domain::{Confidence, RiskLevel};
use super::facts::CaseFacts;
use serde::{Deserialize, Serialize};

/// A recommended next step with a fixed editorial confidence: unambiguous
/// standard responses are high, context-dependent steps medium, unusual
/// situations with several valid paths low.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub text: String,
    pub confidence: Confidence,
}

impl Action {
    fn new(text: &str, confidence: Confidence) -> Self {
        Self {
            text: text.to_string(),
            confidence,
        }
    }
}

const SCENARIO_SEPARATOR: &str = " · ";

/// One-line label for the case, assembled in fixed order: timing token,
/// sale-type token, then the exposure and contract tokens that apply.
pub(crate) fn scenario_description(facts: &CaseFacts) -> String {
    let mut tokens: Vec<&'static str> = vec![facts.timing.label(), facts.sale_type.label()];

    if facts.outstanding_ar {
        tokens.push("outstanding AR");
    }
    if facts.future_booked_shifts {
        tokens.push("future booked shifts");
    }
    tokens.push(facts.contract.label());

    tokens.join(SCENARIO_SEPARATOR)
}

/// Select exactly one guidance paragraph: the no-exposure case first, then
/// per-risk-level sub-cascades, then a default.
pub(crate) fn key_focus(facts: &CaseFacts, level: RiskLevel) -> String {
    if !facts.has_exposure {
        if facts.new_owner_blacklisted {
            return "Nothing is owed, but the new owner is blacklisted: resolve the blacklist review before committing to any ongoing relationship.".to_string();
        }
        return "No financial exposure: update account records and focus on a smooth handover of the relationship.".to_string();
    }

    match level {
        RiskLevel::High => {
            if facts.new_owner_blacklisted {
                "Escalate immediately: a blacklisted buyer is taking over an account with money at risk. Collections and compliance must weigh in before any outreach.".to_string()
            } else if facts.past() && !facts.contract_signed {
                "The sale has closed with no binding commitment. Secure written payment responsibility for the open balance within days, not weeks.".to_string()
            } else if facts.distress_confirmed || facts.refuses_to_pay {
                "The paying party is unlikely or unwilling to pay. Move the balance toward collections early rather than waiting out the transition.".to_string()
            } else {
                "Contain the exposure before it ages: pin down who owes what in writing and escalate at the first missed commitment.".to_string()
            }
        }
        RiskLevel::Medium => {
            if facts.future() {
                "Use the runway before the close: get the contract signed and a payment plan for any pre-sale balance confirmed in advance.".to_string()
            } else if facts.asset_sale && facts.contract_signed && facts.outstanding_ar {
                "The relationship is protected; the job is collecting the old owner's pre-sale balance without souring the new one.".to_string()
            } else {
                "Clarify the open questions around the contract and payment responsibility, and document each answer as it lands.".to_string()
            }
        }
        RiskLevel::Low => {
            "Standard transition: confirm the paperwork, keep billing continuity, and watch the first invoice cycle.".to_string()
        }
    }
}

/// Ordered action list; branch structure mirrors the classifier's
/// precedence groups but each branch enumerates its own texts.
pub(crate) fn priority_actions(facts: &CaseFacts, level: RiskLevel) -> Vec<Action> {
    if !facts.has_exposure {
        let mut actions = vec![
            Action::new(
                "Update account information across all platforms",
                Confidence::High,
            ),
            Action::new(
                "Introduce the account team to the new owner and confirm service continuity",
                Confidence::High,
            ),
        ];
        if facts.new_owner_blacklisted {
            actions.push(Action::new(
                "Hold new business until the blacklist review of the new owner clears",
                Confidence::High,
            ));
            actions.push(Action::new(
                "Check whether the blacklist entry applies to the new legal entity",
                Confidence::Low,
            ));
        } else {
            actions.push(Action::new(
                "Verify no legacy balances surface after the records update",
                Confidence::Medium,
            ));
        }
        return actions;
    }

    if facts.new_owner_blacklisted {
        return vec![
            Action::new(
                "Escalate to collections and compliance before any outreach to the new owner",
                Confidence::High,
            ),
            Action::new(
                "Freeze future booked shifts until the blacklist review is resolved",
                Confidence::High,
            ),
            Action::new(
                "Check whether the blacklist entry applies to the new legal entity",
                Confidence::Low,
            ),
        ];
    }

    match level {
        RiskLevel::High => {
            let mut actions = vec![
                Action::new(
                    "Contact the responsible party within one business day",
                    Confidence::High,
                ),
                Action::new(
                    "Demand written confirmation of payment responsibility for the outstanding AR",
                    Confidence::High,
                ),
                Action::new(
                    "Prepare a collections handoff in case no commitment is secured",
                    Confidence::Medium,
                ),
            ];
            if facts.future_booked_shifts && !facts.contract_signed {
                actions.push(Action::new(
                    "Pause future booked shifts pending a signed contract",
                    Confidence::Medium,
                ));
            }
            actions
        }
        RiskLevel::Medium => {
            let mut actions = Vec::new();
            if facts.contract_signed {
                // The relationship is already secured; the open work is the
                // old owner's balance, not paperwork.
                if facts.outstanding_ar {
                    actions.push(Action::new(
                        "Agree a collection plan with the old owner for the pre-sale balance",
                        Confidence::High,
                    ));
                } else {
                    actions.push(Action::new(
                        "Confirm the signed contract covers the open exposure",
                        Confidence::Medium,
                    ));
                }
            } else {
                actions.push(Action::new(
                    "Send the new owner the service contract for signature",
                    Confidence::High,
                ));
                if facts.outstanding_ar {
                    actions.push(Action::new(
                        "Confirm in writing who is responsible for the pre-sale balance",
                        Confidence::Medium,
                    ));
                }
            }
            actions.push(Action::new(
                "Set a follow-up cadence until every open question is answered",
                Confidence::Medium,
            ));
            actions
        }
        RiskLevel::Low => {
            vec![
                Action::new(
                    "Update account information across all platforms",
                    Confidence::High,
                ),
                Action::new(
                    "Confirm the signed contract covers collection of any pre-sale balance",
                    Confidence::Medium,
                ),
                Action::new("Keep the standard invoicing cadence", Confidence::High),
            ]
        }
    }
}
