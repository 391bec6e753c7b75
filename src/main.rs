#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use usercard_core::config::{DEFAULT_PROXY_URL, RANDOM_USER_API_URL};
use usercard_core::logging::LoggingBuilder;
use usercard_core::{ApplyPolicy, GenderFilter};

use crate::context::AppConfig;

/// Global app config, set from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app config (set from command line or default)
pub fn get_app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// User Card - random profile viewer
#[derive(Parser, Debug)]
#[command(name = "usercard-desktop")]
#[command(about = "User Card - fetch and display a random user profile")]
struct Args {
    /// Random-user API endpoint for the direct card
    #[arg(long, default_value = RANDOM_USER_API_URL)]
    endpoint: String,

    /// Proxy route for the server-backed card
    #[arg(long, default_value = DEFAULT_PROXY_URL)]
    proxy_url: String,

    /// Only fetch users of this gender (male or female)
    #[arg(short, long)]
    gender: Option<GenderFilter>,

    /// Hide the server-backed card
    #[arg(long)]
    no_proxy_card: bool,

    /// Never let a response replace data from a newer request
    #[arg(long)]
    latest_request_wins: bool,
}

impl Args {
    fn into_config(self) -> AppConfig {
        AppConfig {
            endpoint: self.endpoint,
            proxy_url: self.proxy_url,
            gender: self.gender,
            show_proxy_card: !self.no_proxy_card,
            policy: if self.latest_request_wins {
                ApplyPolicy::LatestIssued
            } else {
                ApplyPolicy::LastResolved
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    LoggingBuilder::new()
        .with_filter("usercard=info,usercard_core=info")
        .init()?;

    let config = Args::parse().into_config();
    tracing::info!(
        endpoint = %config.endpoint,
        proxy = %config.proxy_url,
        "Starting User Card"
    );
    let _ = APP_CONFIG.set(config);

    // Narrow window: the card tops out at 30rem
    let window_width = 560.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("User Card")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
    Ok(())
}
