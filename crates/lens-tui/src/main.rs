mod action;
mod app;
mod app_state;
mod component;
mod components;
mod intake;
mod share;
mod theme;
mod view;
mod widgets;

use lens_api::client::ApiClient;
use lens_api::endpoint;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = lens_api::platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let log_path = data_dir.join("scamlens.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Allow RUST_LOG override; default to debug for app code but suppress noisy
    // connection-level DEBUG from HTTP client internals (hyper_util, reqwest).
    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "debug,hyper_util=warn,reqwest=warn,hyper=warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("scamlens log: {}", log_path.display());

    tracing::info!("scamlens starting…");

    let config = lens_api::config::Config::load().unwrap_or_default();

    // SCAMLENS_API_HOST overrides the configured host, same port rules apply.
    let host = std::env::var("SCAMLENS_API_HOST").unwrap_or_else(|_| config.api.host.clone());
    let base_url = endpoint::resolve_base_url(&host, config.api.port);
    tracing::info!("analysis service: {}", base_url);

    let client = ApiClient::new(&base_url);

    // The alternate screen swallows panic output; put the terminal back first.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = ratatui::crossterm::terminal::disable_raw_mode();
        let _ = ratatui::crossterm::execute!(
            std::io::stdout(),
            ratatui::crossterm::terminal::LeaveAlternateScreen,
            ratatui::crossterm::event::DisableMouseCapture,
            ratatui::crossterm::event::DisableBracketedPaste
        );
        tracing::error!("panic: {}", info);
        default_hook(info);
    }));

    let app = app::App::new(
        client,
        config.upload.browse_dir.clone(),
        config.max_upload_bytes(),
    );
    app.run().await
}
