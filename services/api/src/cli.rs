use crate::demo::{run_demo, run_quote_generate, DemoArgs, QuoteGenerateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use studio_core::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Studio Back-Office",
    about = "Run the agency back-office service or generate quotes from the command line",
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
    /// Work with client quotes
    Quote {
        #[command(subcommand)]
        command: QuoteCommand,
    },
    /// Run an end-to-end CLI demo covering the quote and quiz flows
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuoteCommand {
    /// Render the HTML quote document for a brief
    Generate(QuoteGenerateArgs),
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
        Command::Quote {
            command: QuoteCommand::Generate(args),
        } => run_quote_generate(args),
        Command::Demo(args) => run_demo(args),
    }
}
