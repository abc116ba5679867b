use clap::Parser;
use tracing_subscriber::EnvFilter;

use servicebook::cli::{self, Cli};
use servicebook::config::AppConfig;
use servicebook::services::api::http::HttpApi;
use servicebook::services::session::AuthSession;
use servicebook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let api = HttpApi::new(&config.api_base_url, config.request_timeout_secs)?;
    let session = AuthSession::open(Box::new(api.clone()), &config.session_file);

    let mut state = AppState {
        session,
        bookings: Box::new(api),
        config,
    };

    cli::run(cli, &mut state).await
}
