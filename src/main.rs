use anyhow::Context;
use searchd::config::Config;
use searchd::index::{SharedIndex, WordIndex, ingest};
use searchd::server::Server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load().context("loading configuration")?;

    // The index is complete before the first connection is accepted.
    let mut index = WordIndex::new();
    if let Some(dir) = &cfg.index.corpus_dir {
        ingest::load_corpus(dir, &mut index)
            .with_context(|| format!("indexing corpus {}", dir.display()))?;
    }

    let server = Server::bind(&cfg, SharedIndex::new(index)).await?;

    tokio::select! {
        res = server.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
