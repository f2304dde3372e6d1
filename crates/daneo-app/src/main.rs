use anyhow::Context;
use clap::Parser;
use daneo_config::Config;
use daneo_core::SessionFlow;
use tokio::signal;

mod browse;
mod cli;
mod controller;
mod logging;

use self::cli::Cli;
use self::controller::AppController;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine, the key may come from the real environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_format)?;

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    let controller = AppController::new(&config);

    tokio::select! {
        result = run(&controller, &config, &cli) => result,
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            controller.shutdown().await;
            Ok(())
        }
    }
}

async fn run(controller: &AppController, config: &Config, cli: &Cli) -> anyhow::Result<()> {
    let mut flow = SessionFlow::new(config.loader.max_word_count);
    flow.begin_loading(cli.count)?;

    tracing::info!("Session {} started with {} words", flow.id(), cli.count);

    let outcome = controller.load(flow.id(), cli.count).await;
    flow.finish_loading(outcome).context("could not load any words")?;

    if let Some(warning) = flow.warning() {
        eprintln!("일부 단어를 불러오지 못했습니다: {warning}");
    }

    let interactive = atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout);
    browse::browse(&mut flow, interactive).await?;

    match flow.handoff() {
        Some(handoff) => {
            let rendered = browse::render_handoff(&handoff, cli.json)?;
            println!("{}", rendered.trim_end());
        }
        None => tracing::info!("Session {} ended before the test", flow.id()),
    }

    Ok(())
}
