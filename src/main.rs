use anyhow::{Context, Result};
use hightech_site::config::{Config, TranslationSource};
use hightech_site::i18n::{FileTranslationLoader, HttpTranslationLoader, SourceLoader};
use hightech_site::orchestrator::{Orchestrator, Site};
use hightech_site::preferences::FilePreferenceStore;
use hightech_site::render::catalog::SiteCatalog;
use hightech_site::render::layout;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hightech_site=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!("Rendering {:?}", config.page);

    let loader = match &config.translation_source {
        TranslationSource::Url(base_url) => {
            info!("Loading translations from {}", base_url);
            SourceLoader::Http(HttpTranslationLoader::new(reqwest::Client::new(), base_url.clone()))
        }
        TranslationSource::Directory(dir) => {
            info!("Loading translations from {}", dir.display());
            SourceLoader::File(FileTranslationLoader::new(dir.clone()))
        }
    };

    let store = FilePreferenceStore::new(&config.preference_file);
    let page = layout::page_for(&config.page);
    let site = Site::new(loader, Orchestrator::new(store, SiteCatalog::standard(), page));

    // A failed initial load keeps the static markup
    if let Err(e) = site.start(&config.browser_languages).await {
        warn!("Initial translation load failed: {}", e);
    }

    if let Some(code) = &config.language {
        if let Err(e) = site.switch_language(code).await {
            warn!("Switch to '{}' failed: {}", code, e);
        }
    }

    let engine = site.engine().await;
    let json = serde_json::to_string_pretty(engine.page()).context("Failed to serialize page")?;
    println!("{}", json);

    let report = engine.metrics().report();
    info!(
        "Loads: {} started, {} applied, {} failed, {} stale",
        report.loads_started, report.loads_applied, report.loads_failed, report.stale_discarded
    );
    Ok(())
}
