use dotenv::dotenv;
use session::{AccountMenu, HttpTransport, SessionStore, TracingNotifier};
use setup::{Config, tracing::init_tracer};
use std::error::Error;
use tracing::info;

const SERVICE_NAME: &str = "session";

/// Probes the backend for an existing session and reports who is signed in.
///
/// Session state is never persisted locally, so this is also how a client
/// rehydrates on startup.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    let tracer = init_tracer(SERVICE_NAME)?;
    let config = Config::from_env()?;
    info!(endpoint = %config.backend_endpoint, "probing session");

    let transport = HttpTransport::new(&config)?;
    let store = SessionStore::new(transport, TracingNotifier);
    store.fetch_current_user().await;

    match AccountMenu::from(&store.snapshot()) {
        AccountMenu::SignedIn { name, email, .. } => info!(%name, %email, "signed in"),
        AccountMenu::SignedOut | AccountMenu::Loading => info!("no active session"),
    }

    if let Some(tracer) = tracer {
        tracer.shutdown()?;
    }

    Ok(())
}
