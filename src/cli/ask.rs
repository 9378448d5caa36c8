//! The ask command: stream one answer to stdout.

use color_eyre::eyre::{eyre, Result, WrapErr};
use tokio_util::sync::CancellationToken;

use super::args::AskArgs;
use crate::adapters::WriterSink;
use crate::config::TutorConfig;
use crate::stream::SessionOutcome;
use crate::tutor::TutorClient;

/// Merge command-line overrides into the environment config.
pub fn resolve_config(args: &AskArgs, base: TutorConfig) -> TutorConfig {
    let mut config = base;
    if let Some(url) = &args.base_url {
        config = config.with_base_url(url.clone());
    }
    if let Some(key) = &args.api_key {
        config = config.with_api_key(key.clone());
    }
    config
}

/// Ask the question in `args`, rendering fragments to stdout as they arrive.
///
/// Ctrl-C cancels the session. The returned outcome says how it ended;
/// `Err` means nothing was sent.
pub async fn run_ask(args: AskArgs) -> Result<SessionOutcome> {
    let config = resolve_config(&args, TutorConfig::from_env());
    let client = TutorClient::from_config(config)
        .map_err(|e| eyre!("Failed to create HTTP client: {}", e))?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    ctrlc::set_handler(move || on_interrupt.cancel())
        .wrap_err("Failed to install Ctrl-C handler")?;

    let sink = WriterSink::new(std::io::stdout());
    let outcome = client.ask(&args.to_request(), sink, cancel).await?;
    Ok(outcome)
}
