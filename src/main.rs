use steptutor::cli::{self, CliCommand};

use color_eyre::Result;

/// Initialize logging on stderr; stdout carries only the answer.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("steptutor=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = match cli::parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", cli::version::version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        CliCommand::Invalid(message) => {
            eprintln!("Error: {}\n\n{}", message, cli::USAGE);
            std::process::exit(2);
        }
        CliCommand::Ask(args) => args,
    };

    init_logging();

    let outcome = cli::run_ask(args).await?;
    if outcome.is_completed() {
        return Ok(());
    }
    if let Some(err) = outcome.error().filter(|e| e.is_user_visible()) {
        eprintln!("Error: {}", err.user_message());
    }
    std::process::exit(1);
}
