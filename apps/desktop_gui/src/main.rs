use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{
    config::{load_settings, ClientSettings},
    ActorHandle, CallOrchestrator, HttpActor, MissingActor,
};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::ui::DigitalWorldApp;

#[derive(Parser, Debug)]
struct Args {
    /// Settings file (defaults to ./digital_world.toml).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    network_url: Option<String>,
    #[arg(long)]
    canister_id: Option<String>,
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

/// Builds the actor handle. A bad configuration still opens the window; every
/// call then fails with the configuration error.
fn build_actor(settings: &ClientSettings) -> (Arc<dyn ActorHandle>, Option<UiError>) {
    match HttpActor::from_settings(settings) {
        Ok(actor) => {
            tracing::info!(endpoint = %actor.endpoint(), "using backend actor endpoint");
            (Arc::new(actor), None)
        }
        Err(err) => {
            let message = format!("{err:#}");
            tracing::error!("failed to configure backend actor: {message}");
            (
                Arc::new(MissingActor::new(message.clone())),
                Some(UiError::from_message(UiErrorContext::BackendStartup, message)),
            )
        }
    }
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let settings = resolve_settings(&args);
    let filter =
        EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (actor, startup_error) = build_actor(&settings);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(
        cmd_rx,
        ui_tx,
        CallOrchestrator::new(actor),
        startup_error,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Digital World")
            .with_inner_size([520.0, 420.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Digital World",
        options,
        Box::new(|_cc| {
            Ok(Box::new(DigitalWorldApp::new(
                cmd_tx,
                ui_rx,
                "Starting backend worker...".to_string(),
            )))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_settings_fall_back_to_missing_actor() {
        let settings = ClientSettings {
            network_url: "not a url".into(),
            ..ClientSettings::default()
        };
        let (_actor, startup_error) = build_actor(&settings);
        let err = startup_error.expect("configuration error");
        assert_eq!(
            err.category(),
            controller::events::UiErrorCategory::Configuration
        );
    }

    #[test]
    fn valid_settings_build_http_actor() {
        let (_actor, startup_error) = build_actor(&ClientSettings::default());
        assert!(startup_error.is_none());
    }

    #[test]
    fn command_line_overrides_settings() {
        let args = Args::try_parse_from(["desktop_gui", "--canister-id", "abc"]).expect("parse");
        assert_eq!(resolve_settings(&args).canister_id, "abc");
    }
}
