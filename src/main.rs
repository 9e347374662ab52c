#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use agentsync::cli::{Cli, Commands, ConfigCommands};
use agentsync::commands;
use agentsync::config::Config;
use agentsync::utils::output::print_error;
use agentsync::version;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    tracing::debug!(version = %version::long_version(), "starting");

    if let Err(e) = run(&cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter: EnvFilter = if debug {
        "agentsync=debug".into()
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

async fn run(cli: &Cli) -> agentsync::Result<()> {
    // Commands that work offline and never read config
    match &cli.command {
        Commands::Detect { agent } => return commands::detect::execute(agent).await,
        Commands::Examples { protocol } => {
            return commands::examples::execute(protocol.as_deref())
        }
        _ => {}
    }

    let project_root = std::env::current_dir()?;

    // Validation reports broken files itself instead of failing the load
    if let Commands::Config {
        command: command @ ConfigCommands::Validate { .. },
    } = &cli.command
    {
        return commands::config::execute(command, &Config::default(), &project_root);
    }

    let config = Config::load(&project_root)?.with_cli_overrides(cli);
    config.validate()?;

    match &cli.command {
        Commands::Register {
            agent,
            email,
            output,
        } => {
            commands::register::execute(&config, agent, email.as_deref(), output.as_deref()).await
        }
        Commands::Verify { agent_id, email } => {
            commands::verify::execute(&config, agent_id, email.as_deref()).await
        }
        Commands::Health => commands::health::execute(&config).await,
        Commands::Config { command } => commands::config::execute(command, &config, &project_root),
        Commands::Detect { .. } | Commands::Examples { .. } => Ok(()),
    }
}
