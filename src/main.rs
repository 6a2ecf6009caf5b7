//! Demo binary: boot the state engine against the file store and report
//! what it loaded.

use std::sync::Arc;

use artontok::adapters::ai::{GeminiConfig, GeminiKeywordService};
use artontok::adapters::storage::FileBlobStore;
use artontok::config::AppConfig;
use artontok::domain::content::ContentRepository;
use artontok::domain::membership::PaymentOrchestrator;
use artontok::domain::navigation::ViewRouter;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "artontok=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let store = Arc::new(FileBlobStore::new(&config.storage.data_dir));
    let repository = ContentRepository::load_or_default(store).await;
    info!(
        articles = repository.articles().len(),
        site = %repository.settings().site_name,
        "content repository ready"
    );

    let router = ViewRouter::new();
    info!(view = %router.current(), "router initialized");

    let orchestrator = PaymentOrchestrator::new(config.payment.offer());
    info!(vip = orchestrator.vip().is_vip(), "membership gate initialized");

    let keyword_service = GeminiKeywordService::new(
        GeminiConfig::new(config.ai.api_key.clone()).with_model(&config.ai.model),
    );
    let topic = artontok::application::handlers::content::SuggestTopicHandler::new(Arc::new(
        keyword_service,
    ))
    .handle()
    .await?;
    info!(%topic, "suggested next content topic");

    Ok(())
}
