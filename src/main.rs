#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::ProfileData;
use tracing_subscriber::EnvFilter;

use crate::theme::ColorScheme;

/// Profile shown by the page, set once at startup
static PROFILE: OnceLock<ProfileData> = OnceLock::new();

/// Colour scheme requested on the command line
static INITIAL_SCHEME: OnceLock<ColorScheme> = OnceLock::new();

/// Get the active profile (loaded from --profile or the built-in one)
pub fn get_profile() -> &'static ProfileData {
    PROFILE.get().unwrap_or_else(folio_core::profile)
}

/// Get the colour scheme the page starts in
pub fn get_initial_scheme() -> ColorScheme {
    INITIAL_SCHEME.get().copied().unwrap_or_default()
}

/// Folio - single-page portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - personal portfolio page")]
struct Args {
    /// JSON profile to show instead of the built-in one
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Start in the dark colour scheme
    #[arg(long)]
    dark: bool,

    /// Print the rendered page tree as JSON and exit
    #[arg(long)]
    dump_tree: bool,
}

/// Load the requested profile, falling back to the built-in one on error
fn resolve_profile(path: Option<&PathBuf>) -> ProfileData {
    let Some(path) = path else {
        tracing::info!("Using built-in profile");
        return folio_core::profile().clone();
    };

    match folio_core::load_profile(path) {
        Ok(profile) => {
            tracing::info!("Loaded profile '{}' from {:?}", profile.name, path);
            profile
        }
        Err(e) => {
            tracing::error!("Failed to load profile from {:?}: {}", path, e);
            tracing::warn!("Falling back to built-in profile");
            folio_core::profile().clone()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let profile = resolve_profile(args.profile.as_ref());

    if args.dump_tree {
        let tree = folio_core::render_page(&profile);
        match serde_json::to_string_pretty(&tree) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("Failed to serialize page tree: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let title = profile.metadata.title.clone();
    let scheme = if args.dark {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    };

    let _ = PROFILE.set(profile);
    let _ = INITIAL_SCHEME.set(scheme);

    tracing::info!("Starting '{}' in {:?} scheme", title, scheme);

    // Window size: wide enough for the two-column about section
    let window_width = 1200.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
