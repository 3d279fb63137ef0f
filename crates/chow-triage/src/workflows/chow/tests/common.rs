use crate::workflows::chow::domain::{
    BlacklistStatus, CaseInput, ContractStatus, Indicator, SaleType,
};
use crate::workflows::chow::facts::CaseFacts;
use chrono::NaiveDate;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).expect("valid evaluation date")
}

pub(super) fn past_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid past date")
}

pub(super) fn future_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 20).expect("valid future date")
}

/// Closed asset sale with outstanding AR and no contract: the shape most
/// cases arrive in before the team has chased anything down.
pub(super) fn base_case() -> CaseInput {
    CaseInput {
        acquisition_date: past_date(),
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
        new_owner_contact: "ap@cedarhealth.example".to_string(),
    }
}

pub(super) fn no_exposure_case() -> CaseInput {
    CaseInput {
        outstanding_ar: false,
        future_booked_shifts: false,
        ..base_case()
    }
}

pub(super) fn facts_for(input: &CaseInput) -> CaseFacts {
    CaseFacts::derive(input, today())
}
