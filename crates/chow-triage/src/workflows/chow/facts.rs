use super::domain::{
    BlacklistStatus, CaseInput, ContractStatus, Indicator, SaleType, Timing,
};
use chrono::NaiveDate;

/// Normalized facts derived once per evaluation and shared by every
/// downstream component, so the classifier, narrative generators, and
/// checklist builder all branch on the same booleans.
#[derive(Debug, Clone, Copy)]
pub struct CaseFacts {
    pub timing: Timing,
    pub sale_type: SaleType,
    pub contract: ContractStatus,
    pub outstanding_ar: bool,
    pub future_booked_shifts: bool,
    pub has_exposure: bool,
    pub asset_sale: bool,
    pub stock_sale: bool,
    pub unknown_sale_type: bool,
    pub contract_signed: bool,
    pub contract_unsigned: bool,
    pub contract_unknown: bool,
    pub new_owner_blacklisted: bool,
    pub old_owner_blacklisted: bool,
    pub distress_confirmed: bool,
    pub distress_indicator: Indicator,
    pub refuses_to_pay: bool,
    pub willingness_unknown: bool,
    pub bad_debt: bool,
}

impl CaseFacts {
    /// Date comparison is date-only; `today` must be read once per
    /// evaluation so a run straddling midnight stays consistent.
    pub fn derive(input: &CaseInput, today: NaiveDate) -> Self {
        let timing = if input.acquisition_date <= today {
            Timing::Past
        } else {
            Timing::Future
        };

        Self {
            timing,
            sale_type: input.sale_type,
            contract: input.contract_signed,
            outstanding_ar: input.outstanding_ar,
            future_booked_shifts: input.future_booked_shifts,
            has_exposure: input.outstanding_ar || input.future_booked_shifts,
            asset_sale: input.sale_type == SaleType::Asset,
            stock_sale: input.sale_type == SaleType::Stock,
            unknown_sale_type: input.sale_type == SaleType::Unknown,
            contract_signed: input.contract_signed == ContractStatus::Signed,
            contract_unsigned: input.contract_signed == ContractStatus::Unsigned,
            contract_unknown: input.contract_signed == ContractStatus::Unknown,
            new_owner_blacklisted: matches!(
                input.blacklisted,
                BlacklistStatus::NewOwner | BlacklistStatus::Both
            ),
            old_owner_blacklisted: matches!(
                input.blacklisted,
                BlacklistStatus::OldOwner | BlacklistStatus::Both
            ),
            distress_confirmed: input.financial_distress == Indicator::Yes,
            distress_indicator: input.financial_distress,
            refuses_to_pay: input.willingness_to_pay == Indicator::No,
            willingness_unknown: input.willingness_to_pay == Indicator::Unknown,
            bad_debt: input.bad_debt,
        }
    }

    pub const fn past(&self) -> bool {
        matches!(self.timing, Timing::Past)
    }

    pub const fn future(&self) -> bool {
        matches!(self.timing, Timing::Future)
    }
}
