use clap::Parser;
use porthole::{
    EchoEngine, Engine, EvaluatorBridge, FileLoader, Repl,
    config::{self, ReplConfig},
    engine,
};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "porthole.json")]
    config: PathBuf,

    /// Prompt override
    #[arg(short, long)]
    prompt: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

async fn run(cli: &Cli) -> porthole::Result<()> {
    let mut config = if cli.config.exists() {
        config::from_file(&cli.config)?
    } else {
        ReplConfig::default()
    };
    if let Some(prompt) = &cli.prompt {
        config.prompt = prompt.clone();
    }
    debug!("config: {:?}", config);

    let (shell, engine_ports) = engine::ports(config.channel_capacity);
    tokio::spawn(EchoEngine.run(engine_ports));

    let loader = FileLoader::new(shell.file_requests, shell.file_payloads);
    tokio::spawn(async move {
        if let Err(e) = loader.run().await {
            debug!("file loader stopped: {}", e);
        }
    });

    let bridge = EvaluatorBridge::new(shell.requests, shell.responses);
    let repl = Repl::new(
        config,
        bridge,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    repl.run().await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer())
        .init();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
