use anyhow::{Context, Result};
use model::Artifact;

mod app;
mod state;
mod ui;

fn main() -> Result<()> {
    env_logger::init();

    // Load before touching the terminal so a bad artifact fails loudly.
    let artifact = Artifact::load(Artifact::DEFAULT_PATH)
        .with_context(|| format!("cannot start without '{}'", Artifact::DEFAULT_PATH))?;
    log::info!("loaded artifact for {}", artifact.target());

    app::run::run(artifact)
}
