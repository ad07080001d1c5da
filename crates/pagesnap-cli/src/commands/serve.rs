use axum::routing::get;
use axum::Json;
use clap::Args;
use pagesnap_screenshots::{configure_routes, AppState, ChromeScreenshotProvider, ScreenshotApiDoc};
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::{info, warn};
use utoipa::OpenApi;

/// Grace period granted to in-flight requests after a termination signal.
/// Captures still running when it expires are aborted with the process.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[derive(Args)]
pub struct ServeCommand {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1:8383", env = "PAGESNAP_ADDRESS")]
    pub address: String,

    /// Bearer token callers must present
    #[arg(long, env = "PAGESNAP_TOKEN")]
    pub token: String,
}

impl ServeCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(self.run())
    }

    async fn run(self) -> anyhow::Result<()> {
        let provider = Arc::new(ChromeScreenshotProvider::new());
        let state = Arc::new(AppState::new(provider, self.token));

        info!("Using screenshot provider: {}", state.provider_name());

        let app = configure_routes()
            .with_state(state)
            .route("/api-docs/openapi.json", get(openapi_json));

        let listener = TcpListener::bind(&self.address).await?;
        info!("Pagesnap server listening on {}", self.address);

        let draining = Arc::new(Notify::new());
        let signal_seen = draining.clone();

        let server = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                info!("Shutdown signal received, draining connections...");
                signal_seen.notify_waiters();
            })
            .into_future();
        tokio::pin!(server);

        tokio::select! {
            result = &mut server => result?,
            _ = async {
                draining.notified().await;
                tokio::time::sleep(SHUTDOWN_GRACE).await;
            } => {
                warn!(
                    "Grace period of {:?} expired, aborting in-flight requests",
                    SHUTDOWN_GRACE
                );
            }
        }

        info!("Server stopped");
        Ok(())
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ScreenshotApiDoc::openapi())
}

/// Resolves when SIGINT or SIGTERM is received
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
