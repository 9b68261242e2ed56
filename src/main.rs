use anyhow::Context;
use clap::Parser;
use colored::*;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use termorch::ai::factory::ProviderFactory;
use termorch::config::Config;
use termorch::server::OrchestratorServer;
use termorch::{ui, Objective, Orchestrator};

mod cli;

use cli::Cli;

fn init_tracing(cli: &Cli) {
    let default_filter = match (cli.debug, cli.serve) {
        (true, _) => "termorch=debug,tower_http=debug",
        (false, true) => "termorch=info,tower_http=info",
        (false, false) => "termorch=warn",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_orchestrator(config: &Config) -> anyhow::Result<Arc<Orchestrator>> {
    let backend = ProviderFactory::create(&config.provider, config)?;
    Ok(Arc::new(Orchestrator::new(backend).with_max_tokens(config.max_tokens)))
}

async fn serve(cli: &Cli, mut config: Config) -> anyhow::Result<()> {
    if let Some(bind) = &cli.bind {
        config.bind_address = bind.clone();
    }

    let orchestrator = build_orchestrator(&config)?;

    eprintln!("{} Starting API server on http://{}", "[>>]".cyan().bold(), config.bind_address);
    eprintln!("  POST /api/orchestrate");
    eprintln!("  GET  /api/health");

    OrchestratorServer::new(config.bind_address.clone(), orchestrator)
        .start()
        .await?;

    eprintln!("{} Server stopped.", "[BYE]".cyan());
    Ok(())
}

async fn plan_once(cli: &Cli, config: Config) -> anyhow::Result<()> {
    let text = match cli.objective_text() {
        Some(text) => text,
        None => ui::read_objective()?,
    };

    // backend 생성 전에 검증 (빈 objective는 backend를 건드리지 않음)
    let objective = Objective::new(text)?;

    let orchestrator = build_orchestrator(&config)?;

    let spinner = ui::create_spinner(&format!(
        "Generating plan with {}...",
        orchestrator.backend_name()
    ));
    let result = orchestrator.orchestrate_objective(&objective).await;

    let plan = match result {
        Ok(plan) => {
            ui::finish_spinner(&spinner, "Plan ready");
            plan
        }
        Err(e) => {
            ui::fail_spinner(&spinner, e.kind());
            return Err(e.into());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", ui::render_plan(&plan));
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.init_config {
        let path = Config::init().context("failed to write config file")?;
        eprintln!("{} Config written to {}", "[OK]".green(), path.display());
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(provider) = &cli.provider {
        config.provider = provider.clone();
    }

    if cli.serve {
        serve(&cli, config).await
    } else {
        plan_once(&cli, config).await
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if cli.debug {
        eprintln!("{} {:?}", "DEBUG:".yellow(), cli);
    }

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "[X]".red().bold(), e);
        std::process::exit(1);
    }
}
