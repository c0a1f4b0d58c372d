//! Lapclock - An interactive terminal countdown timer
//! 
//! This is the main entry point for the lapclock application.

use tokio::{
    io::{self, AsyncWriteExt, BufReader},
    sync::mpsc,
};
use tracing::info;

use lapclock::{
    config::Config,
    prompt::{collect_settings, run_menu},
    services::{Notifier, TerminalOutput},
    state::CountdownController,
    tasks::{countdown_task, TokioScheduler},
    utils::interrupt_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Diagnostics go to stderr so they stay out of the countdown output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("lapclock={}", config.log_level()).into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting lapclock v1.0.0");

    let mut stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();

    let settings = collect_settings(&mut stdin, &mut stdout, config.preset()).await?;
    info!(
        "Configuration: seconds={}, loops={}, messages={}",
        settings.seconds,
        settings.loops,
        settings.messages.len()
    );

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let scheduler = TokioScheduler::new(events_tx.clone());
    let notifier = if config.no_notify { Notifier::log_only() } else { Notifier::new(true) };
    let mut controller = CountdownController::new(settings, scheduler, TerminalOutput::new(notifier));
    controller.start_countdown();

    let runner = tokio::spawn(countdown_task(controller, events_rx));

    run_menu(&mut stdin, &mut stdout, interrupt_signal(), &events_tx).await?;

    runner.await?;
    stdout.flush().await?;

    // The stdin reader may still be parked in a blocking read, which would keep
    // the runtime from shutting down
    std::process::exit(0);
}
