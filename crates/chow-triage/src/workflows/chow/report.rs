use super::alerts::CaseAlert;
use super::checklist::{CaseChecklist, ChecklistTask};
use super::domain::{CaseInput, ChecklistStage};
use super::narrative::Action;
use super::risk::RiskAssessment;
use serde::Serialize;
use std::fmt::Write;

/// Rendered text for one non-empty checklist stage, suitable for handing
/// to the ticketing collaborator as an opaque body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageDocument {
    pub stage: ChecklistStage,
    pub stage_label: &'static str,
    pub body: String,
}

fn case_title(input: &CaseInput) -> String {
    match (
        input.old_owner_name.trim().is_empty(),
        input.new_owner_name.trim().is_empty(),
    ) {
        (false, false) => format!(
            "CHOW account transition: {} -> {}",
            input.old_owner_name.trim(),
            input.new_owner_name.trim()
        ),
        (false, true) => format!(
            "CHOW account transition from {}",
            input.old_owner_name.trim()
        ),
        (true, false) => format!("CHOW account transition to {}", input.new_owner_name.trim()),
        (true, true) => "CHOW account transition".to_string(),
    }
}

fn push_header_fact(out: &mut String, label: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        let _ = writeln!(out, "{label}: {value}");
    }
}

fn push_task_line(out: &mut String, task: &ChecklistTask) {
    let marker = if task.completed { "x" } else { " " };
    let _ = write!(out, "- [{marker}] {}", task.text);
    if let Some(label) = task.label {
        let _ = write!(out, " [{}]", label.label());
    }
    if let Some(note) = &task.note {
        let _ = write!(out, " (note: {note})");
    }
    let _ = writeln!(out);
}

/// Serialize the full result bundle into one structured text document.
/// Pure presentation: fields and stages with no content are omitted
/// entirely rather than rendered empty.
pub(crate) fn render_full_document(
    input: &CaseInput,
    risk: &RiskAssessment,
    scenario: &str,
    key_focus: &str,
    actions: &[Action],
    checklist: &CaseChecklist,
    alerts: &[CaseAlert],
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", case_title(input));
    let _ = writeln!(out, "Scenario: {scenario}");
    let _ = writeln!(out, "Acquisition date: {}", input.acquisition_date);
    push_header_fact(&mut out, "Affected facilities", &input.affected_facilities);
    push_header_fact(&mut out, "New facility names", &input.new_facility_names);
    push_header_fact(&mut out, "New owner contact", &input.new_owner_contact);

    let _ = writeln!(out);
    let _ = writeln!(out, "Risk: {}", risk.level.label());
    for reason in &risk.reasons {
        let _ = writeln!(out, "- {reason}");
    }
    let _ = writeln!(out, "Key focus: {key_focus}");

    if !actions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Priority actions:");
        for (index, action) in actions.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {} (confidence: {})",
                index + 1,
                action.text,
                action.confidence.label()
            );
        }
    }

    for (stage, tasks) in checklist.stages() {
        if tasks.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Checklist / {}:", stage.label());
        for task in tasks {
            push_task_line(&mut out, task);
        }
    }

    if !alerts.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Alerts:");
        for alert in alerts {
            let _ = writeln!(out, "- {}: {}", alert.severity.label(), alert.text);
        }
    }

    out
}

/// One document per non-empty stage, in stage order.
pub(crate) fn render_stage_documents(
    input: &CaseInput,
    checklist: &CaseChecklist,
) -> Vec<StageDocument> {
    checklist
        .stages()
        .into_iter()
        .filter(|(_, tasks)| !tasks.is_empty())
        .map(|(stage, tasks)| {
            let mut body = String::new();
            let _ = writeln!(body, "{} / {}", case_title(input), stage.label());
            for task in tasks {
                push_task_line(&mut body, task);
            }
            StageDocument {
                stage,
                stage_label: stage.label(),
                body,
            }
        })
        .collect()
}
