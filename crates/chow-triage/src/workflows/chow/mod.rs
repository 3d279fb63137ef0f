//! Change-of-ownership (CHOW) triage: converts the intake facts for one
//! ownership transition into a risk rating, prioritized actions, a staged
//! checklist, standalone alerts, and rendered ticket documents.
//!
//! Every stage is a pure function of the same immutable [`CaseInput`] and
//! the evaluation date; nothing here holds state between evaluations.

mod alerts;
mod checklist;
mod facts;
mod narrative;
mod report;
mod risk;

pub mod domain;
pub mod intake;

#[cfg(test)]
mod tests;

pub use alerts::CaseAlert;
pub use checklist::{CaseChecklist, ChecklistTask};
pub use domain::{
    AlertSeverity, BlacklistStatus, CaseInput, ChecklistStage, Confidence, ContractStatus,
    Indicator, RiskLevel, SaleType, TaskLabel, Timing,
};
pub use facts::CaseFacts;
pub use intake::{CaseSubmission, IntakeError};
pub use narrative::Action;
pub use report::StageDocument;
pub use risk::{cascade_keys, RiskAssessment};

use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Stateless evaluator for CHOW cases.
#[derive(Debug, Default)]
pub struct TriageEngine;

impl TriageEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline for one case. `today` is the single external
    /// input besides the case itself and is used only for timing.
    pub fn evaluate(&self, input: &CaseInput, today: NaiveDate) -> CaseEvaluation {
        let facts = CaseFacts::derive(input, today);

        let risk = risk::classify(&facts);
        let scenario = narrative::scenario_description(&facts);
        let key_focus = narrative::key_focus(&facts, risk.level);
        let priority_actions = narrative::priority_actions(&facts, risk.level);
        let checklist = checklist::build_checklist(&facts, risk.level);
        let alerts = alerts::build_alerts(&facts);

        let full_document = report::render_full_document(
            input,
            &risk,
            &scenario,
            &key_focus,
            &priority_actions,
            &checklist,
            &alerts,
        );
        let stage_documents = report::render_stage_documents(input, &checklist);

        CaseEvaluation {
            evaluated_on: today,
            risk,
            scenario,
            key_focus,
            priority_actions,
            checklist,
            alerts,
            full_document,
            stage_documents,
        }
    }

    /// Evaluate against the local calendar date, read exactly once.
    pub fn evaluate_today(&self, input: &CaseInput) -> CaseEvaluation {
        let today = Local::now().date_naive();
        self.evaluate(input, today)
    }
}

/// Everything the pipeline produces for one case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseEvaluation {
    pub evaluated_on: NaiveDate,
    pub risk: RiskAssessment,
    pub scenario: String,
    pub key_focus: String,
    pub priority_actions: Vec<Action>,
    pub checklist: CaseChecklist,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<CaseAlert>,
    pub full_document: String,
    pub stage_documents: Vec<StageDocument>,
}
