use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Legal structure of the ownership transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleType {
    Asset,
    Stock,
    Unknown,
}

impl SaleType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asset => "asset sale",
            Self::Stock => "stock sale",
            Self::Unknown => "sale type unknown",
        }
    }
}

/// Whether the new owner holds a signed service contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Signed,
    Unsigned,
    Unknown,
}

impl ContractStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Signed => "contract signed",
            Self::Unsigned => "no contract",
            Self::Unknown => "contract status unknown",
        }
    }
}

/// Three-state answer for facts the operations team may not have yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Yes,
    No,
    Unknown,
}

impl Indicator {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unknown => "unknown",
        }
    }
}

/// Collections blacklist status per party to the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlacklistStatus {
    None,
    OldOwner,
    NewOwner,
    Both,
}

impl BlacklistStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "not blacklisted",
            Self::OldOwner => "old owner blacklisted",
            Self::NewOwner => "new owner blacklisted",
            Self::Both => "both owners blacklisted",
        }
    }
}

/// Discrete risk classification produced by the rule cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Editorial confidence attached to a recommended action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

/// The four checklist stages, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistStage {
    PreOutreach,
    Outreach,
    PostOutreach,
    Continuous,
}

impl ChecklistStage {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::PreOutreach,
            Self::Outreach,
            Self::PostOutreach,
            Self::Continuous,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PreOutreach => "Pre-Outreach",
            Self::Outreach => "Outreach",
            Self::PostOutreach => "Post-Outreach",
            Self::Continuous => "Continuous",
        }
    }
}

/// Routing hint for a checklist task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskLabel {
    Billing,
    Sales,
    Escalate,
}

impl TaskLabel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Billing => "billing",
            Self::Sales => "sales",
            Self::Escalate => "escalate",
        }
    }
}

/// Whether the acquisition has already closed relative to the evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    Past,
    Future,
}

impl Timing {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Past => "completed acquisition",
            Self::Future => "upcoming acquisition",
        }
    }
}

/// The validated facts for one change-of-ownership case.
///
/// Immutable for the duration of one evaluation; the free-text fields are
/// pass-through descriptive data and never branch any rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseInput {
    pub acquisition_date: NaiveDate,
    pub sale_type: SaleType,
    pub contract_signed: ContractStatus,
    pub outstanding_ar: bool,
    pub future_booked_shifts: bool,
    pub financial_distress: Indicator,
    pub willingness_to_pay: Indicator,
    pub blacklisted: BlacklistStatus,
    pub bad_debt: bool,
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
