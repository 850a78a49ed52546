use crate::demo::{run_demo, run_status_report, DemoArgs, StatusArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_onboarding::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Onboarding",
    about = "Evaluate corporate credit onboarding progress and required financial documents",
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
    /// Evaluate onboarding payloads exported from the onboarding API
    Onboarding {
        #[command(subcommand)]
        command: OnboardingCommand,
    },
    /// Walk a sample company through the onboarding steps
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum OnboardingCommand {
    /// Print section statuses and the financial documents table for a payload file
    Status(StatusArgs),
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
        Command::Onboarding {
            command: OnboardingCommand::Status(args),
        } => run_status_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
