use std::{env, sync::Arc};

use anyhow::Context;
use log::info;
use model::Artifact;
use tokio::{net::TcpListener, signal};

use server::create_router;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "8000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let artifact = Artifact::load(Artifact::DEFAULT_PATH)
        .with_context(|| format!("cannot start without '{}'", Artifact::DEFAULT_PATH))?;
    info!(
        "loaded artifact for {} with {} features",
        artifact.target(),
        artifact.num_features()
    );

    let app = create_router(Arc::new(artifact));

    let addr = format!(
        "{}:{}",
        env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
        env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string()),
    );
    let listener = TcpListener::bind(&addr).await?;
    info!("listening at {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = signal::ctrl_c().await;
            info!("received SIGTERM");
        })
        .await?;

    Ok(())
}
