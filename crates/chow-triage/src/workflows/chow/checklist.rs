use super::domain::{ChecklistStage, RiskLevel, TaskLabel, Timing};
use super::facts::CaseFacts;
use serde::{Deserialize, Serialize};

/// One checklist item with its completion state and routing metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistTask {
    pub text: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TaskLabel>,
}

impl ChecklistTask {
    fn open(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            note: None,
            label: None,
        }
    }

    fn done(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: true,
            note: None,
            label: None,
        }
    }

    fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    fn with_label(mut self, label: TaskLabel) -> Self {
        self.label = Some(label);
        self
    }
}

/// The four-stage task list for one case, stages in fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseChecklist {
    pub pre_outreach: Vec<ChecklistTask>,
    pub outreach: Vec<ChecklistTask>,
    pub post_outreach: Vec<ChecklistTask>,
    pub continuous: Vec<ChecklistTask>,
}

impl CaseChecklist {
    pub fn stage(&self, stage: ChecklistStage) -> &[ChecklistTask] {
        match stage {
            ChecklistStage::PreOutreach => &self.pre_outreach,
            ChecklistStage::Outreach => &self.outreach,
            ChecklistStage::PostOutreach => &self.post_outreach,
            ChecklistStage::Continuous => &self.continuous,
        }
    }

    pub fn stages(&self) -> [(ChecklistStage, &[ChecklistTask]); 4] {
        ChecklistStage::ordered().map(|stage| (stage, self.stage(stage)))
    }
}

pub(crate) fn build_checklist(facts: &CaseFacts, level: RiskLevel) -> CaseChecklist {
    let pre_outreach = pre_outreach_tasks(facts);
    let mut outreach = Vec::new();
    let mut post_outreach = Vec::new();
    let mut continuous = Vec::new();

    outreach.push(ChecklistTask::open(
        "Introduce the account team to the new owner",
    ));
    if !facts.contract_signed {
        outreach.push(
            ChecklistTask::open("Send the service contract to the new owner for signature")
                .with_label(TaskLabel::Sales),
        );
    }
    if facts.contract_unknown {
        outreach.push(
            ChecklistTask::open("Confirm whether a contract already exists with the new owner")
                .with_label(TaskLabel::Sales),
        );
    }
    if facts.asset_sale && facts.outstanding_ar {
        outreach.push(
            ChecklistTask::open("Contact the old owner about settling the pre-sale balance")
                .with_label(TaskLabel::Billing),
        );
    }
    if facts.stock_sale && facts.outstanding_ar {
        outreach.push(
            ChecklistTask::open("Notify the new owner of the assumed outstanding balance")
                .with_label(TaskLabel::Billing),
        );
    }
    if facts.distress_confirmed {
        outreach.push(
            ChecklistTask::open("Discuss payment plan options with the responsible party")
                .with_label(TaskLabel::Billing)
                .with_note("Financial distress was reported at intake"),
        );
    }

    post_outreach.push(ChecklistTask::open(
        "Update account ownership records across all platforms",
    ));
    if facts.outstanding_ar {
        post_outreach.push(
            ChecklistTask::open("Confirm the payment commitment for the open balance in writing")
                .with_label(TaskLabel::Billing),
        );
    }
    if !facts.contract_signed {
        post_outreach.push(
            ChecklistTask::open("Track the contract signature to completion")
                .with_label(TaskLabel::Sales),
        );
    }
    if facts.bad_debt {
        post_outreach.push(
            ChecklistTask::open("Coordinate with collections on the open bad-debt file")
                .with_label(TaskLabel::Escalate),
        );
    }

    continuous.push(ChecklistTask::open(
        "Monitor invoices through the first full billing cycle",
    ));
    if facts.future_booked_shifts {
        continuous.push(
            ChecklistTask::open("Watch future booked shifts for payment coverage")
                .with_label(TaskLabel::Billing),
        );
    }
    if facts.distress_confirmed && level != RiskLevel::Low {
        continuous.push(
            ChecklistTask::open("Watch for further distress signals from the responsible party")
                .with_label(TaskLabel::Escalate),
        );
    }

    // Applied last: with nothing to collect, the staged work collapses to
    // the minimal "nothing owed" path and supersedes every append above.
    if !facts.has_exposure {
        outreach = vec![ChecklistTask::open(
            "Introduce the account team to the new owner and confirm service continuity",
        )];
        post_outreach = vec![ChecklistTask::open(
            "Update account ownership records across all platforms",
        )];
        continuous = vec![ChecklistTask::done(
            "No balances to monitor; close out once records are updated",
        )];
    }

    CaseChecklist {
        pre_outreach,
        outreach,
        post_outreach,
        continuous,
    }
}

/// Stage 1 restates the intake facts as completed items so the ticket
/// shows what was already known, plus the bad-debt check whose completion
/// tracks whether collections involvement is already confirmed.
fn pre_outreach_tasks(facts: &CaseFacts) -> Vec<ChecklistTask> {
    let ar = if facts.outstanding_ar { "yes" } else { "no" };
    let fbs = if facts.future_booked_shifts {
        "yes"
    } else {
        "no"
    };
    let timing = match facts.timing {
        Timing::Past => "acquisition has already closed",
        Timing::Future => "acquisition has not closed yet",
    };

    let mut tasks = vec![
        ChecklistTask::done(format!("Outstanding AR on file: {ar}"))
            .with_label(TaskLabel::Billing),
        ChecklistTask::done(format!("Future booked shifts on file: {fbs}")),
        ChecklistTask::done(format!("Timing confirmed: {timing}")),
        ChecklistTask::done(format!("Sale structure recorded: {}", facts.sale_type.label())),
    ];

    let bad_debt_check =
        ChecklistTask::open("Check whether the account is already in collections");
    if facts.bad_debt {
        tasks.push(
            ChecklistTask::done(bad_debt_check.text.clone())
                .with_note("Bad debt flagged at intake")
                .with_label(TaskLabel::Escalate),
        );
    } else {
        tasks.push(bad_debt_check);
    }

    tasks
}
