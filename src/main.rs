use clap::Parser;
use nerkh::cli::commands::{Cli, Commands, SourceArgs};
use nerkh::config::{parse_sources, parse_timeout, Config};
use nerkh::Nerkh;

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(config, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable JSON.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nerkh=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run_command(mut config: Config, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Run { opts, output } => {
            apply_source_args(&mut config, &opts)?;
            if let Some(output) = output {
                config.output_path = output;
            }
            let report = Nerkh::new(&config).run().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Preview { opts } => {
            apply_source_args(&mut config, &opts)?;
            let report = Nerkh::new(&config).refresh().await;
            println!("{}", serde_json::to_string_pretty(&report.snapshot)?);
        }
        Commands::Sources => {
            let sources = Nerkh::new(&config).sources();
            println!("{}", serde_json::to_string_pretty(&sources)?);
        }
    }
    Ok(())
}

fn apply_source_args(config: &mut Config, opts: &SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !opts.sources.is_empty() {
        config.sources = parse_sources(opts.sources.iter().map(String::as_str))?;
    }
    if let Some(path) = &opts.aliases {
        config.aliases_path = path.clone();
    }
    if let Some(secs) = opts.timeout {
        config.timeout = parse_timeout(&secs.to_string())?;
    }
    Ok(())
}
