use super::common::{base_case, facts_for, future_date, no_exposure_case};
use crate::workflows::chow::domain::{
    BlacklistStatus, ContractStatus, Indicator, RiskLevel, SaleType,
};
use crate::workflows::chow::risk::{cascade_keys, classify};

#[test]
fn cascade_order_is_stable() {
    let keys = cascade_keys();
    assert_eq!(keys.first(), Some(&"no_exposure"));
    assert_eq!(keys.last(), Some(&"default"));
    assert_eq!(keys.len(), 16);
    let no_exposure = keys.iter().position(|key| *key == "no_exposure").unwrap();
    let blacklisted = keys
        .iter()
        .position(|key| *key == "new_owner_blacklisted_with_exposure")
        .unwrap();
    assert!(no_exposure < blacklisted);
}

#[test]
fn no_exposure_caps_risk_regardless_of_other_signals() {
    let mut input = no_exposure_case();
    input.sale_type = SaleType::Unknown;
    input.contract_signed = ContractStatus::Unknown;
    input.financial_distress = Indicator::Yes;
    input.willingness_to_pay = Indicator::No;
    input.bad_debt = true;
    input.blacklisted = BlacklistStatus::OldOwner;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::Low);
    assert!(!assessment.reasons.is_empty());
}

#[test]
fn blacklisted_buyer_bumps_no_exposure_case_to_medium() {
    let mut input = no_exposure_case();
    input.blacklisted = BlacklistStatus::NewOwner;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::Medium);
    assert_eq!(assessment.reasons.len(), 2);
}

#[test]
fn stock_sale_with_signed_contract_is_low() {
    let mut input = base_case();
    input.sale_type = SaleType::Stock;
    input.contract_signed = ContractStatus::Signed;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::Low);
}

#[test]
fn stock_sale_contract_cannot_save_a_blacklisted_buyer() {
    let mut input = base_case();
    input.sale_type = SaleType::Stock;
    input.contract_signed = ContractStatus::Signed;
    input.blacklisted = BlacklistStatus::Both;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::High);
    // The stock-sale clause resolves this, not the generic blacklist clause.
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("signed contract")));
}

#[test]
fn distress_is_noted_but_does_not_move_the_stock_sale_level() {
    let mut input = base_case();
    input.sale_type = SaleType::Stock;
    input.contract_signed = ContractStatus::Signed;
    input.financial_distress = Indicator::Yes;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::Low);
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("distress")));
}

#[test]
fn future_close_with_contract_is_low_unless_asset_ar_remains() {
    let mut input = base_case();
    input.acquisition_date = future_date();
    input.contract_signed = ContractStatus::Signed;
    input.sale_type = SaleType::Unknown;
    input.outstanding_ar = false;
    input.future_booked_shifts = true;

    assert_eq!(classify(&facts_for(&input)).level, RiskLevel::Low);

    input.sale_type = SaleType::Asset;
    input.outstanding_ar = true;

    let assessment = classify(&facts_for(&input));
    assert_eq!(assessment.level, RiskLevel::Medium);
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("payment plan")));
}

#[test]
fn blacklisted_buyer_with_exposure_is_high() {
    let mut input = base_case();
    input.blacklisted = BlacklistStatus::NewOwner;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::High);
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("blacklisted")));
}

#[test]
fn closed_sale_without_commitment_is_high() {
    let assessment = classify(&facts_for(&base_case()));
    assert_eq!(assessment.level, RiskLevel::High);
}

#[test]
fn unknown_contract_after_close_counts_as_no_commitment() {
    let mut input = base_case();
    input.contract_signed = ContractStatus::Unknown;

    assert_eq!(classify(&facts_for(&input)).level, RiskLevel::High);
}

#[test]
fn distressed_asset_seller_with_ar_is_high() {
    let mut input = base_case();
    input.contract_signed = ContractStatus::Signed;
    input.financial_distress = Indicator::Yes;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::High);
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("unlikely to pay")));
}

#[test]
fn stated_refusal_to_pay_is_high() {
    let mut input = base_case();
    input.contract_signed = ContractStatus::Signed;
    input.financial_distress = Indicator::No;
    input.willingness_to_pay = Indicator::No;

    assert_eq!(classify(&facts_for(&input)).level, RiskLevel::High);
}

#[test]
fn unknown_sale_type_after_close_with_exposure_is_high() {
    let mut input = base_case();
    input.sale_type = SaleType::Unknown;
    input.contract_signed = ContractStatus::Signed;
    input.financial_distress = Indicator::No;
    input.willingness_to_pay = Indicator::Yes;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::High);
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("legal responsibility")));
}

#[test]
fn bad_debt_inherited_by_uncommitted_stock_buyer_is_high() {
    let mut input = base_case();
    input.acquisition_date = future_date();
    input.sale_type = SaleType::Stock;
    input.bad_debt = true;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::High);
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("collections")));
}

#[test]
fn bad_debt_with_unknown_contract_falls_to_the_unknown_contract_clause() {
    let mut input = base_case();
    input.acquisition_date = future_date();
    input.sale_type = SaleType::Stock;
    input.contract_signed = ContractStatus::Unknown;
    input.bad_debt = true;
    input.willingness_to_pay = Indicator::Yes;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::Medium);
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("Contract status")));
}

#[test]
fn future_close_without_contract_is_medium() {
    let mut input = base_case();
    input.acquisition_date = future_date();

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::Medium);
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("time remains")));
}

#[test]
fn signed_asset_sale_with_ar_is_medium() {
    let mut input = base_case();
    input.contract_signed = ContractStatus::Signed;
    input.financial_distress = Indicator::No;
    input.willingness_to_pay = Indicator::Yes;

    assert_eq!(classify(&facts_for(&input)).level, RiskLevel::Medium);
}

#[test]
fn unknown_willingness_with_ar_is_medium() {
    let mut input = base_case();
    input.acquisition_date = future_date();
    input.contract_signed = ContractStatus::Unknown;
    input.financial_distress = Indicator::No;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::Medium);
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("Willingness")));
}

#[test]
fn old_owner_blacklist_on_asset_sale_with_ar_is_medium() {
    let mut input = base_case();
    input.acquisition_date = future_date();
    input.contract_signed = ContractStatus::Unknown;
    input.financial_distress = Indicator::No;
    input.willingness_to_pay = Indicator::Yes;
    input.blacklisted = BlacklistStatus::OldOwner;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::Medium);
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("Old owner")));
}

#[test]
fn unknown_contract_with_exposure_is_medium() {
    let mut input = base_case();
    input.acquisition_date = future_date();
    input.contract_signed = ContractStatus::Unknown;
    input.financial_distress = Indicator::No;
    input.willingness_to_pay = Indicator::Yes;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::Medium);
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("Contract status")));
}

#[test]
fn unmatched_combination_falls_back_to_medium() {
    let mut input = base_case();
    input.contract_signed = ContractStatus::Signed;
    input.outstanding_ar = false;
    input.future_booked_shifts = true;
    input.financial_distress = Indicator::No;
    input.willingness_to_pay = Indicator::Yes;

    let assessment = classify(&facts_for(&input));

    assert_eq!(assessment.level, RiskLevel::Medium);
    assert!(assessment
        .reasons
        .iter()
        .any(|reason| reason.contains("manual review")));
}
