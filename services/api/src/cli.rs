use crate::demo::{run_case_evaluation, run_demo, DemoArgs, EvaluateArgs};
use crate::server;
use chow_triage::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "CHOW Triage",
    about = "Evaluate change-of-ownership cases and run the triage service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with individual CHOW cases
    Case {
        #[command(subcommand)]
        command: CaseCommand,
    },
    /// Run an end-to-end CLI demo covering evaluation and ticket dispatch
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CaseCommand {
    /// Evaluate one case and print the rendered triage document
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Case {
            command: CaseCommand::Evaluate(args),
        } => run_case_evaluation(args),
        Command::Demo(args) => run_demo(args),
    }
}
