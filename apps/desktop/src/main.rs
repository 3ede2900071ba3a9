use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::{load_settings, ClientSettings},
    ActorHandle, CallOrchestrator, HttpActor, ViewState,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Call the Digital World backend from the command line")]
struct Args {
    /// Settings file (defaults to ./digital_world.toml).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    network_url: Option<String>,
    #[arg(long)]
    canister_id: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask the backend for a greeting.
    Greet {
        #[arg(default_value = "")]
        name: String,
    },
    /// Buy a digital world listing.
    Buy {
        #[arg(long, allow_hyphen_values = true)]
        digital_world_id: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },
    /// Claim the proceeds of a sale.
    Claim {
        #[arg(long, allow_hyphen_values = true)]
        digital_world_id: String,
    },
}

fn resolve_settings(args: &Args) -> ClientSettings {
    let mut settings = load_settings(args.config.as_deref());
    if let Some(v) = &args.network_url {
        settings.network_url = v.clone();
    }
    if let Some(v) = &args.canister_id {
        settings.canister_id = v.clone();
    }
    settings
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = resolve_settings(&args);

    let filter =
        EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let actor: Arc<dyn ActorHandle> =
        Arc::new(HttpActor::from_settings(&settings).context("failed to configure actor")?);
    let orchestrator = CallOrchestrator::new(actor);
    let mut view = ViewState::default();

    match args.command {
        Command::Greet { name } => {
            if let Err(err) = orchestrator.submit_greeting(&mut view, &name).await {
                tracing::error!("unhandled greeting failure: {err}");
                return Err(err).context("greeting call failed");
            }
            println!("{}", view.greeting());
        }
        Command::Buy {
            digital_world_id,
            amount,
        } => {
            view.set_digital_world_id_input(digital_world_id);
            view.set_amount_input(amount);
            orchestrator.submit_purchase(&mut view).await;
            println!("{}", view.result());
        }
        Command::Claim { digital_world_id } => {
            view.set_digital_world_id_input(digital_world_id);
            orchestrator.submit_claim(&mut view).await;
            println!("{}", view.result());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_purchase_arguments_as_raw_text() {
        let args = Args::try_parse_from([
            "desktop",
            "buy",
            "--digital-world-id",
            "abc",
            "--amount",
            "-5",
        ])
        .expect("parse");
        match args.command {
            Command::Buy {
                digital_world_id,
                amount,
            } => {
                assert_eq!(digital_world_id, "abc");
                assert_eq!(amount, "-5");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn greeting_name_may_be_empty() {
        let args = Args::try_parse_from(["desktop", "greet"]).expect("parse");
        assert!(matches!(args.command, Command::Greet { name } if name.is_empty()));
    }

    #[test]
    fn command_line_overrides_settings() {
        let args = Args::try_parse_from([
            "desktop",
            "--config",
            "/nonexistent/digital_world.toml",
            "--network-url",
            "http://10.1.1.1:4943",
            "--canister-id",
            "ryjl3-tyaaa-aaaaa-aaaba-cai",
            "claim",
            "--digital-world-id",
            "3",
        ])
        .expect("parse");
        let settings = resolve_settings(&args);
        assert_eq!(settings.network_url, "http://10.1.1.1:4943");
        assert_eq!(settings.canister_id, "ryjl3-tyaaa-aaaaa-aaaba-cai");
    }
}
