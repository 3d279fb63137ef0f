use crate::infra::{InMemoryTicketSink, Ticket, TicketSink};
use chow_triage::error::AppError;
use chow_triage::workflows::chow::{
    CaseEvaluation, CaseSubmission, ChecklistStage, TriageEngine,
};
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Transaction closing date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) acquisition_date: String,
    /// Legal structure of the sale: asset | stock | unknown
    #[arg(long)]
    pub(crate) sale_type: String,
    /// Signed service contract with the new owner: yes | no | unknown
    #[arg(long)]
    pub(crate) contract_signed: String,
    /// Pre-sale accounts receivable exposure: yes | no
    #[arg(long)]
    pub(crate) outstanding_ar: String,
    /// Forward-booked service exposure: yes | no
    #[arg(long)]
    pub(crate) future_booked_shifts: String,
    /// Financial distress signals: yes | no | unknown (default unknown)
    #[arg(long)]
    pub(crate) financial_distress: Option<String>,
    /// Stated willingness to pay: yes | no | unknown (default unknown)
    #[arg(long)]
    pub(crate) willingness_to_pay: Option<String>,
    /// Blacklist status: none | old | new | both (default none)
    #[arg(long)]
    pub(crate) blacklisted: Option<String>,
    /// Account already in collections: yes | no (default no)
    #[arg(long)]
    pub(crate) bad_debt: Option<String>,
    #[arg(long)]
    pub(crate) old_owner_name: Option<String>,
    #[arg(long)]
    pub(crate) new_owner_name: Option<String>,
    #[arg(long)]
    pub(crate) affected_facilities: Option<String>,
    #[arg(long)]
    pub(crate) new_facility_names: Option<String>,
    #[arg(long)]
    pub(crate) new_owner_contact: Option<String>,
    /// Override the evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print only one checklist stage: pre-outreach | outreach | post-outreach | continuous
    #[arg(long, value_parser = parse_stage)]
    pub(crate) stage: Option<ChecklistStage>,
    /// Emit the full evaluation as JSON instead of the rendered document
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn parse_stage(raw: &str) -> Result<ChecklistStage, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pre-outreach" | "pre_outreach" => Ok(ChecklistStage::PreOutreach),
        "outreach" => Ok(ChecklistStage::Outreach),
        "post-outreach" | "post_outreach" => Ok(ChecklistStage::PostOutreach),
        "continuous" => Ok(ChecklistStage::Continuous),
        _ => Err(format!(
            "unknown stage '{raw}': expected pre-outreach, outreach, post-outreach, or continuous"
        )),
    }
}

fn evaluate_submission(
    submission: CaseSubmission,
    today: Option<NaiveDate>,
) -> Result<CaseEvaluation, AppError> {
    let input = submission.into_input()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    Ok(TriageEngine::new().evaluate(&input, today))
}

pub(crate) fn run_case_evaluation(args: EvaluateArgs) -> Result<(), AppError> {
    let submission = CaseSubmission {
        acquisition_date: args.acquisition_date,
        sale_type: args.sale_type,
        contract_signed: args.contract_signed,
        outstanding_ar: args.outstanding_ar,
        future_booked_shifts: args.future_booked_shifts,
        financial_distress: args.financial_distress,
        willingness_to_pay: args.willingness_to_pay,
        blacklisted: args.blacklisted,
        bad_debt: args.bad_debt,
        old_owner_name: args.old_owner_name.unwrap_or_default(),
        new_owner_name: args.new_owner_name.unwrap_or_default(),
        affected_facilities: args.affected_facilities.unwrap_or_default(),
        new_facility_names: args.new_facility_names.unwrap_or_default(),
        new_owner_contact: args.new_owner_contact.unwrap_or_default(),
    };

    let evaluation = evaluate_submission(submission, args.today)?;

    if args.json {
        match serde_json::to_string_pretty(&evaluation) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("evaluation serialization failed: {err}"),
        }
        return Ok(());
    }

    match args.stage {
        None => print!("{}", evaluation.full_document),
        Some(stage) => {
            let document = evaluation
                .stage_documents
                .iter()
                .find(|document| document.stage == stage);
            match document {
                Some(document) => print!("{}", document.body),
                None => println!("Stage {} has no content for this case.", stage.label()),
            }
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    println!("CHOW triage demo (evaluation date {today})");

    let distressed = CaseSubmission {
        acquisition_date: (today - chrono::Duration::days(12)).format("%Y-%m-%d").to_string(),
        sale_type: "asset".to_string(),
        contract_signed: "no".to_string(),
        outstanding_ar: "yes".to_string(),
        future_booked_shifts: "yes".to_string(),
        financial_distress: Some("yes".to_string()),
        willingness_to_pay: Some("unknown".to_string()),
        blacklisted: None,
        bad_debt: None,
        old_owner_name: "Maple Grove Care LLC".to_string(),
        new_owner_name: "Cedar Health Partners".to_string(),
        affected_facilities: "Maple Grove Skilled Nursing".to_string(),
        new_facility_names: "Cedar Grove Rehabilitation".to_string(),
        new_owner_contact: "ap@cedarhealth.example".to_string(),
    };

    let evaluation = evaluate_submission(distressed, Some(today))?;
    println!();
    print!("{}", evaluation.full_document);

    let sink = InMemoryTicketSink::default();
    let receipt = sink
        .create(Ticket {
            title: format!("CHOW triage ({})", evaluation.scenario),
            body: evaluation.full_document.clone(),
        })
        .map_err(|err| AppError::Io(std::io::Error::other(err.to_string())))?;
    println!();
    println!(
        "Dispatched full document to the ticket tracker as {}",
        receipt.ticket_id
    );

    for document in &evaluation.stage_documents {
        let receipt = sink
            .create(Ticket {
                title: format!("CHOW {} checklist", document.stage_label),
                body: document.body.clone(),
            })
            .map_err(|err| AppError::Io(std::io::Error::other(err.to_string())))?;
        println!(
            "Dispatched {} checklist as {}",
            document.stage_label, receipt.ticket_id
        );
    }

    let clean = CaseSubmission {
        acquisition_date: (today - chrono::Duration::days(30)).format("%Y-%m-%d").to_string(),
        sale_type: "stock".to_string(),
        contract_signed: "yes".to_string(),
        outstanding_ar: "no".to_string(),
        future_booked_shifts: "no".to_string(),
        financial_distress: None,
        willingness_to_pay: None,
        blacklisted: None,
        bad_debt: None,
        old_owner_name: "Sunrise Senior Living".to_string(),
        new_owner_name: "Brightpath Care Group".to_string(),
        affected_facilities: "Sunrise Commons".to_string(),
        new_facility_names: String::new(),
        new_owner_contact: String::new(),
    };

    let evaluation = evaluate_submission(clean, Some(today))?;
    println!();
    println!("Second case: clean stock transition");
    println!(
        "- Risk {} with {} priority action(s)",
        evaluation.risk.level.label(),
        evaluation.priority_actions.len()
    );
    println!("- Key focus: {}", evaluation.key_focus);

    println!();
    println!("{} ticket(s) recorded by the demo sink", sink.tickets().len());

    Ok(())
}
