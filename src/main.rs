mod app;
mod appointments;
mod config;
mod contact;
mod domain;
mod donation;
mod favorites;
mod filter;
mod fixtures;
mod gateway;
mod images;
mod router;
mod shell;
mod state;
mod views;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::{APP_NAME, OndaApp};
use clap::Parser;
use eframe::{NativeOptions, egui};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, domain::Role, state::Session};

/// ONDA ANIMAL - adoption, castration scheduling and donations
#[derive(Parser, Debug)]
#[command(name = "onda-animal")]
#[command(about = "Adoption and donation client for ONDA ANIMAL")]
struct Args {
    /// Path to a custom config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured user role
    #[arg(short, long, value_enum)]
    role: Option<Role>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("onda_animal=info".parse()?))
        .init();

    let args = Args::parse();
    let mut config = Config::load(args.config).context("Failed to load configuration")?;
    if let Some(role) = args.role {
        tracing::info!(?role, "role overridden from the command line");
        config.role = role;
    }

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    let session = Session::new(config);
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(OndaApp::new(cc, session)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe failed: {err}"))
}
