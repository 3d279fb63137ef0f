use chow_triage::workflows::chow::{
    AlertSeverity, BlacklistStatus, CaseInput, Confidence, ContractStatus, Indicator, RiskLevel,
    SaleType, TriageEngine,
};
use chrono::NaiveDate;

fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).expect("valid evaluation date")
}

fn case(acquisition_date: NaiveDate) -> CaseInput {
    CaseInput {
        acquisition_date,
        sale_type: SaleType::Asset,
        contract_signed: ContractStatus::Unsigned,
        outstanding_ar: true,
        future_booked_shifts: false,
        financial_distress: Indicator::Unknown,
        willingness_to_pay: Indicator::Unknown,
        blacklisted: BlacklistStatus::None,
        bad_debt: false,
        old_owner_name: "Maple Grove Care LLC".to_string(),
        new_owner_name: "Cedar Health Partners".to_string(),
        affected_facilities: "Maple Grove Skilled Nursing".to_string(),
        new_facility_names: String::new(),
        new_owner_contact: String::new(),
    }
}

#[test]
fn clean_stock_transition_evaluates_low_with_standard_actions() {
    let engine = TriageEngine::new();
    let mut input = case(NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"));
    input.sale_type = SaleType::Stock;
    input.contract_signed = ContractStatus::Signed;
    input.outstanding_ar = false;
    input.future_booked_shifts = false;

    let evaluation = engine.evaluate(&input, evaluation_date());

    assert_eq!(evaluation.risk.level, RiskLevel::Low);
    let update = evaluation
        .priority_actions
        .iter()
        .find(|action| action.text == "Update account information across all platforms")
        .expect("platform update action present");
    assert_eq!(update.confidence, Confidence::High);
    assert!(evaluation.alerts.is_empty());
}

#[test]
fn every_categorical_combination_reaches_exactly_one_level() {
    let engine = TriageEngine::new();
    let dates = [
        NaiveDate::from_ymd_opt(2026, 2, 1).expect("past date"),
        NaiveDate::from_ymd_opt(2026, 4, 20).expect("future date"),
    ];
    let sale_types = [SaleType::Asset, SaleType::Stock, SaleType::Unknown];
    let contracts = [
        ContractStatus::Signed,
        ContractStatus::Unsigned,
        ContractStatus::Unknown,
    ];
    let indicators = [Indicator::Yes, Indicator::No, Indicator::Unknown];
    let blacklists = [
        BlacklistStatus::None,
        BlacklistStatus::OldOwner,
        BlacklistStatus::NewOwner,
        BlacklistStatus::Both,
    ];
    let bools = [false, true];

    let mut evaluated = 0usize;
    for date in dates {
        for sale_type in sale_types {
            for contract in contracts {
                for outstanding_ar in bools {
                    for future_booked_shifts in bools {
                        for distress in indicators {
                            for willingness in indicators {
                                for blacklisted in blacklists {
                                    for bad_debt in bools {
                                        let mut input = case(date);
                                        input.sale_type = sale_type;
                                        input.contract_signed = contract;
                                        input.outstanding_ar = outstanding_ar;
                                        input.future_booked_shifts = future_booked_shifts;
                                        input.financial_distress = distress;
                                        input.willingness_to_pay = willingness;
                                        input.blacklisted = blacklisted;
                                        input.bad_debt = bad_debt;

                                        let evaluation =
                                            engine.evaluate(&input, evaluation_date());
                                        assert!(matches!(
                                            evaluation.risk.level,
                                            RiskLevel::Low | RiskLevel::Medium | RiskLevel::High
                                        ));
                                        assert!(
                                            !evaluation.risk.reasons.is_empty(),
                                            "empty reasons for {input:?}"
                                        );
                                        assert!(!evaluation.priority_actions.is_empty());
                                        assert!(!evaluation.key_focus.is_empty());
                                        evaluated += 1;
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    assert_eq!(evaluated, 2 * 3 * 3 * 2 * 2 * 3 * 3 * 4 * 2);
}

#[test]
fn no_exposure_dominates_every_other_danger_signal() {
    let engine = TriageEngine::new();
    let mut input = case(NaiveDate::from_ymd_opt(2026, 2, 1).expect("past date"));
    input.outstanding_ar = false;
    input.future_booked_shifts = false;
    input.sale_type = SaleType::Unknown;
    input.contract_signed = ContractStatus::Unknown;
    input.financial_distress = Indicator::Yes;
    input.willingness_to_pay = Indicator::No;
    input.bad_debt = true;
    input.blacklisted = BlacklistStatus::OldOwner;

    let evaluation = engine.evaluate(&input, evaluation_date());

    assert_eq!(evaluation.risk.level, RiskLevel::Low);
}

#[test]
fn alerts_still_fire_when_the_no_exposure_path_caps_risk() {
    let engine = TriageEngine::new();
    let mut input = case(NaiveDate::from_ymd_opt(2026, 2, 1).expect("past date"));
    input.outstanding_ar = false;
    input.future_booked_shifts = false;
    input.blacklisted = BlacklistStatus::Both;

    let evaluation = engine.evaluate(&input, evaluation_date());

    assert_eq!(evaluation.risk.level, RiskLevel::Medium);
    assert!(evaluation
        .alerts
        .iter()
        .any(|alert| alert.severity == AlertSeverity::Critical));
}

#[test]
fn no_exposure_checklist_collapses_to_the_minimal_path() {
    let engine = TriageEngine::new();
    let mut input = case(NaiveDate::from_ymd_opt(2026, 2, 1).expect("past date"));
    input.outstanding_ar = false;
    input.future_booked_shifts = false;
    input.bad_debt = true;
    input.financial_distress = Indicator::Yes;

    let evaluation = engine.evaluate(&input, evaluation_date());

    assert_eq!(evaluation.checklist.outreach.len(), 1);
    assert_eq!(evaluation.checklist.post_outreach.len(), 1);
    assert_eq!(evaluation.checklist.continuous.len(), 1);
    assert!(evaluation.checklist.continuous[0].completed);
}

#[test]
fn evaluate_is_idempotent_for_a_fixed_date() {
    let engine = TriageEngine::new();
    let input = case(NaiveDate::from_ymd_opt(2026, 2, 1).expect("past date"));

    let first = engine.evaluate(&input, evaluation_date());
    let second = engine.evaluate(&input, evaluation_date());

    assert_eq!(first, second);
}

#[test]
fn acquisition_on_the_evaluation_date_counts_as_past() {
    let engine = TriageEngine::new();
    let input = case(evaluation_date());

    let evaluation = engine.evaluate(&input, evaluation_date());

    // Past timing + no contract + exposure is the high-risk path.
    assert_eq!(evaluation.risk.level, RiskLevel::High);
}
