use crate::demo::{run_analyze, run_demo, run_search, AnalyzeArgs, DemoArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use toymatch::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Toy Match",
    about = "Analyze parenting styles and match toys from the command line",
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
    /// Score a six-question parenting survey
    Analyze(AnalyzeArgs),
    /// Rank a catalog against a child profile
    Search(SearchArgs),
    /// Run an end-to-end demo: survey, questionnaire, and recommendations
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Product catalog CSV to serve instead of APP_CATALOG_PATH
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Search(args) => run_search(args),
        Command::Demo(args) => run_demo(args),
    }
}
