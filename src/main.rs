use anyhow::Context;
use clap::Parser;
use philosphere::cli::Cli;
use philosphere::config::Config;
use philosphere::content::{ContentSource, GeminiClient};
use philosphere::logging::init_tracing;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let mut config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);
    if let Err(err) = config.validate() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    if let Some(path) = init_tracing(cli.log_file.as_deref()) {
        tracing::info!(log = %path.display(), config = %config_path.display(), "PhiloSphere starting");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("philosphere-content")
        .build()
        .context("failed to start async runtime")?;

    let client = GeminiClient::new(&config.service, config.content.philosopher_count)
        .context("failed to build HTTP client")?;
    tracing::info!(model = client.model(), configured = client.is_configured(), "Content client ready");
    let source: Arc<dyn ContentSource> = Arc::new(client);

    philosphere::ui::run(&config, source, runtime.handle()).context("terminal UI failed")?;

    runtime.shutdown_background();
    Ok(())
}
