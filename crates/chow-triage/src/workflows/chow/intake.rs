use super::domain::{BlacklistStatus, CaseInput, ContractStatus, Indicator, SaleType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw form submission as the intake form delivers it: categorical fields
/// as strings, optional fields absent when the operator left them unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseSubmission {
    pub acquisition_date: String,
    pub sale_type: String,
    pub contract_signed: String,
    pub outstanding_ar: String,
    pub future_booked_shifts: String,
    #[serde(default)]
    pub financial_distress: Option<String>,
    #[serde(default)]
    pub willingness_to_pay: Option<String>,
    #[serde(default)]
    pub blacklisted: Option<String>,
    #[serde(default)]
    pub bad_debt: Option<String>,
    #[serde(default)]
    pub old_owner_name: String,
    #[serde(default)]
    pub new_owner_name: String,
    #[serde(default)]
    pub affected_facilities: String,
    #[serde(default)]
    pub new_facility_names: String,
    #[serde(default)]
    pub new_owner_contact: String,
}

/// Validation errors raised by the intake guard. Out-of-domain values are
/// a caller contract violation and fail fast rather than falling through.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("invalid acquisition date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("unrecognized {field} value '{value}'")]
    OutOfDomain { field: &'static str, value: String },
}

impl CaseSubmission {
    /// Validate every categorical field and apply the form baseline for
    /// unset optionals: distress and willingness default to unknown,
    /// blacklist to none, bad debt to no.
    pub fn into_input(self) -> Result<CaseInput, IntakeError> {
        let acquisition_date = parse_date(&self.acquisition_date)?;
        let sale_type = parse_sale_type(&self.sale_type)?;
        let contract_signed = parse_contract(&self.contract_signed)?;
        let outstanding_ar = parse_yes_no("outstanding_ar", &self.outstanding_ar)?;
        let future_booked_shifts =
            parse_yes_no("future_booked_shifts", &self.future_booked_shifts)?;

        let financial_distress = match self.financial_distress.as_deref() {
            None => Indicator::Unknown,
            Some(raw) => parse_indicator("financial_distress", raw)?,
        };
        let willingness_to_pay = match self.willingness_to_pay.as_deref() {
            None => Indicator::Unknown,
            Some(raw) => parse_indicator("willingness_to_pay", raw)?,
        };
        let blacklisted = match self.blacklisted.as_deref() {
            None => BlacklistStatus::None,
            Some(raw) => parse_blacklist(raw)?,
        };
        let bad_debt = match self.bad_debt.as_deref() {
            None => false,
            Some(raw) => parse_yes_no("bad_debt", raw)?,
        };

        Ok(CaseInput {
            acquisition_date,
            sale_type,
            contract_signed,
            outstanding_ar,
            future_booked_shifts,
            financial_distress,
            willingness_to_pay,
            blacklisted,
            bad_debt,
            old_owner_name: self.old_owner_name,
            new_owner_name: self.new_owner_name,
            affected_facilities: self.affected_facilities,
            new_facility_names: self.new_facility_names,
            new_owner_contact: self.new_owner_contact,
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, IntakeError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|source| IntakeError::InvalidDate {
        value: raw.to_string(),
        source,
    })
}

fn normalized(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

fn parse_sale_type(raw: &str) -> Result<SaleType, IntakeError> {
    match normalized(raw).as_str() {
        "asset" => Ok(SaleType::Asset),
        "stock" => Ok(SaleType::Stock),
        "unknown" => Ok(SaleType::Unknown),
        _ => Err(IntakeError::OutOfDomain {
            field: "sale_type",
            value: raw.to_string(),
        }),
    }
}

fn parse_contract(raw: &str) -> Result<ContractStatus, IntakeError> {
    match normalized(raw).as_str() {
        "yes" => Ok(ContractStatus::Signed),
        "no" => Ok(ContractStatus::Unsigned),
        "unknown" => Ok(ContractStatus::Unknown),
        _ => Err(IntakeError::OutOfDomain {
            field: "contract_signed",
            value: raw.to_string(),
        }),
    }
}

fn parse_yes_no(field: &'static str, raw: &str) -> Result<bool, IntakeError> {
    match normalized(raw).as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(IntakeError::OutOfDomain {
            field,
            value: raw.to_string(),
        }),
    }
}

fn parse_indicator(field: &'static str, raw: &str) -> Result<Indicator, IntakeError> {
    match normalized(raw).as_str() {
        "yes" => Ok(Indicator::Yes),
        "no" => Ok(Indicator::No),
        "unknown" | "" => Ok(Indicator::Unknown),
        _ => Err(IntakeError::OutOfDomain {
            field,
            value: raw.to_string(),
        }),
    }
}

fn parse_blacklist(raw: &str) -> Result<BlacklistStatus, IntakeError> {
    match normalized(raw).as_str() {
        "none" | "" => Ok(BlacklistStatus::None),
        "old" => Ok(BlacklistStatus::OldOwner),
        "new" => Ok(BlacklistStatus::NewOwner),
        "both" => Ok(BlacklistStatus::Both),
        _ => Err(IntakeError::OutOfDomain {
            field: "blacklisted",
            value: raw.to_string(),
        }),
    }
}
