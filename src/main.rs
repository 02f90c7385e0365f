use anyhow::{Context, Result};
use country_explorer::config::AppConfig;
use country_explorer::services::{CountryService, RestCountriesClient};
use country_explorer::ui_dioxus::App;
use dioxus_desktop::{Config, WindowBuilder};
use std::any::Any;
use std::sync::Arc;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(api_url = %config.api_url, timeout = ?config.request_timeout, "Starting country explorer");

    let client = RestCountriesClient::new(&config).context("Failed to build HTTP client")?;
    let service = Arc::new(CountryService::new(Arc::new(client)));

    // The service is shared by every component through context
    let contexts: Vec<Box<dyn Fn() -> Box<dyn Any>>> =
        vec![Box::new(move || Box::new(service.clone()) as Box<dyn Any>)];

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_resizable(true),
    );

    dioxus_desktop::launch::launch(App, contexts, window);

    Ok(())
}
