use super::domain::RiskLevel;
use super::facts::CaseFacts;
use serde::{Deserialize, Serialize};

/// Risk classification plus the justification trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub reasons: Vec<String>,
}

/// One clause of the ordered cascade. Clause order is the tie-break:
/// the first clause whose guard holds decides the level, even when a
/// later clause's guard would also hold for the same input.
struct RiskRule {
    key: &'static str,
    applies: fn(&CaseFacts) -> bool,
    resolve: fn(&CaseFacts) -> (RiskLevel, Vec<String>),
}

fn rule_cascade() -> Vec<RiskRule> {
    vec![
        // Zero financial exposure caps risk regardless of any other
        // danger signal, except a blacklisted buyer still blocks the
        // relationship from continuing.
        RiskRule {
            key: "no_exposure",
            applies: |f| !f.has_exposure,
            resolve: |f| {
                let mut reasons = vec![
                    "No outstanding AR and no future booked shifts: nothing is at financial risk."
                        .to_string(),
                ];
                if f.new_owner_blacklisted {
                    reasons.push(
                        "New owner is blacklisted; the relationship cannot continue as-is even with no balance at risk."
                            .to_string(),
                    );
                    (RiskLevel::Medium, reasons)
                } else {
                    (RiskLevel::Low, reasons)
                }
            },
        },
        RiskRule {
            key: "stock_sale_contract_signed",
            applies: |f| f.stock_sale && f.contract_signed,
            resolve: |f| {
                if f.new_owner_blacklisted {
                    return (
                        RiskLevel::High,
                        vec![
                            "Stock sale with a signed contract, but the new owner is blacklisted."
                                .to_string(),
                            "A signed contract cannot continue a relationship collections has blocked."
                                .to_string(),
                        ],
                    );
                }
                let mut reasons = vec![
                    "Stock sale with a signed contract: the new owner assumes all existing debt."
                        .to_string(),
                ];
                if f.distress_confirmed {
                    reasons.push(
                        "Financial distress was reported; monitor payments even though the debt transferred."
                            .to_string(),
                    );
                }
                (RiskLevel::Low, reasons)
            },
        },
        RiskRule {
            key: "future_close_contract_signed",
            applies: |f| f.future() && f.contract_signed && !f.new_owner_blacklisted,
            resolve: |f| {
                if f.asset_sale && f.outstanding_ar {
                    return (
                        RiskLevel::Medium,
                        vec![
                            "Contract is signed ahead of an asset-sale close, but pre-sale AR stays with the old owner."
                                .to_string(),
                            "Confirm a payment plan for the outstanding balance before the acquisition closes."
                                .to_string(),
                        ],
                    );
                }
                (
                    RiskLevel::Low,
                    vec![
                        "Acquisition has not closed and the contract is already signed: time to prepare."
                            .to_string(),
                    ],
                )
            },
        },
        RiskRule {
            key: "new_owner_blacklisted_with_exposure",
            applies: |f| f.new_owner_blacklisted && f.has_exposure,
            resolve: |_| {
                (
                    RiskLevel::High,
                    vec!["New owner is blacklisted while money is at risk.".to_string()],
                )
            },
        },
        RiskRule {
            key: "closed_without_commitment",
            applies: |f| f.past() && !f.contract_signed && f.has_exposure,
            resolve: |_| {
                (
                    RiskLevel::High,
                    vec![
                        "Ownership already changed with no binding commitment and open exposure."
                            .to_string(),
                    ],
                )
            },
        },
        RiskRule {
            key: "asset_sale_distressed_seller",
            applies: |f| f.asset_sale && f.distress_confirmed && f.outstanding_ar,
            resolve: |_| {
                (
                    RiskLevel::High,
                    vec![
                        "Asset sale with financial distress: the party responsible for pre-sale AR is unlikely to pay."
                            .to_string(),
                    ],
                )
            },
        },
        RiskRule {
            key: "refusal_to_pay",
            applies: |f| f.refuses_to_pay && f.outstanding_ar,
            resolve: |_| {
                (
                    RiskLevel::High,
                    vec![
                        "The responsible party has stated they will not pay the outstanding AR."
                            .to_string(),
                    ],
                )
            },
        },
        RiskRule {
            key: "unknown_structure_after_close",
            applies: |f| f.unknown_sale_type && f.has_exposure && f.past(),
            resolve: |_| {
                (
                    RiskLevel::High,
                    vec![
                        "Sale structure is unknown after the close, so legal responsibility for the exposure is unclear."
                            .to_string(),
                    ],
                )
            },
        },
        // Strictly a confirmed-unsigned contract: when the contract status
        // is unknown, the case falls through to the unknown-contract clause
        // near the end of the cascade.
        RiskRule {
            key: "bad_debt_inherited_uncommitted",
            applies: |f| f.bad_debt && f.stock_sale && f.contract_unsigned,
            resolve: |_| {
                (
                    RiskLevel::High,
                    vec![
                        "Stock-sale buyer would inherit an account already in collections without having committed to a contract."
                            .to_string(),
                    ],
                )
            },
        },
        RiskRule {
            key: "future_close_no_contract",
            applies: |f| f.future() && f.contract_unsigned && f.has_exposure,
            resolve: |_| {
                (
                    RiskLevel::Medium,
                    vec![
                        "No contract yet, but the acquisition has not closed: time remains to mitigate."
                            .to_string(),
                    ],
                )
            },
        },
        RiskRule {
            key: "stock_sale_no_contract",
            applies: |f| f.stock_sale && f.contract_unsigned && f.has_exposure,
            resolve: |_| {
                (
                    RiskLevel::Medium,
                    vec![
                        "Stock sale without a contract: the buyer assumes the debt but has not committed to the relationship."
                            .to_string(),
                    ],
                )
            },
        },
        RiskRule {
            key: "asset_sale_contract_signed_ar",
            applies: |f| f.asset_sale && f.contract_signed && f.outstanding_ar,
            resolve: |_| {
                (
                    RiskLevel::Medium,
                    vec![
                        "Signed contract protects the ongoing relationship, but pre-sale AR still needs collecting from the old owner."
                            .to_string(),
                    ],
                )
            },
        },
        RiskRule {
            key: "unknown_willingness",
            applies: |f| f.willingness_unknown && f.outstanding_ar,
            resolve: |_| {
                (
                    RiskLevel::Medium,
                    vec![
                        "Willingness to pay the outstanding AR has not been established.".to_string(),
                    ],
                )
            },
        },
        RiskRule {
            key: "old_owner_blacklisted_asset_ar",
            applies: |f| f.old_owner_blacklisted && f.outstanding_ar && f.asset_sale,
            resolve: |_| {
                (
                    RiskLevel::Medium,
                    vec![
                        "Old owner is blacklisted and still owes pre-sale AR on an asset sale."
                            .to_string(),
                    ],
                )
            },
        },
        RiskRule {
            key: "unknown_contract_with_exposure",
            applies: |f| f.contract_unknown && f.has_exposure,
            resolve: |_| {
                (
                    RiskLevel::Medium,
                    vec!["Contract status is unknown while exposure is open.".to_string()],
                )
            },
        },
        RiskRule {
            key: "default",
            applies: |_| true,
            resolve: |_| default_outcome(),
        },
    ]
}

fn default_outcome() -> (RiskLevel, Vec<String>) {
    (
        RiskLevel::Medium,
        vec!["No specific rule matched; holding at medium risk pending manual review.".to_string()],
    )
}

/// Walk the cascade top to bottom and return the first matching clause's
/// outcome. Total: the final catch-all clause matches every input.
pub(crate) fn classify(facts: &CaseFacts) -> RiskAssessment {
    for rule in rule_cascade() {
        if (rule.applies)(facts) {
            let (level, reasons) = (rule.resolve)(facts);
            debug_assert!(!reasons.is_empty(), "rule {} produced no reasons", rule.key);
            return RiskAssessment { level, reasons };
        }
    }

    let (level, reasons) = default_outcome();
    RiskAssessment { level, reasons }
}

/// Clause keys in evaluation order, exposed so the precedence table stays
/// auditable from tests.
pub fn cascade_keys() -> Vec<&'static str> {
    rule_cascade().iter().map(|rule| rule.key).collect()
}
