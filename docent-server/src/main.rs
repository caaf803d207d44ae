//! Binary entry point: configuration, corpus loading, Ollama clients,
//! room embeddings, then serve.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use docent_core::config::DocentConfig;
use docent_corpus::{load_records, RoomIndex};
use docent_generation::Generator;
use docent_llm::{OllamaChat, OllamaEmbedder};
use docent_routing::{RoomEmbeddings, RoomSelector};
use docent_server::{router, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "docent.toml".to_string());
    let config = DocentConfig::load_or_default(Path::new(&config_path))
        .with_context(|| format!("loading configuration from {config_path}"))?;

    // A missing or broken corpus file still yields a usable service: the
    // synthetic info room exists regardless.
    let records = match load_records(Path::new(&config.server.corpus_path)) {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, path = %config.server.corpus_path, "corpus unavailable, serving info room only");
            Vec::new()
        }
    };
    let index = RoomIndex::build(&records);

    let timeout = Duration::from_secs(config.llm.request_timeout_secs);
    let chat = Arc::new(OllamaChat::new(config.llm.base_url.clone(), timeout));
    let embedder = Arc::new(OllamaEmbedder::new(
        config.llm.base_url.clone(),
        config.llm.embed_model.clone(),
        timeout,
    ));

    if !chat.health_check().await {
        warn!(base_url = %config.llm.base_url, "Ollama not reachable at startup");
    }

    // Room embeddings power only the fallback selection stage; if they
    // cannot be computed the classifier stage still routes questions.
    let embeddings = match RoomEmbeddings::compute(
        &index,
        embedder.as_ref(),
        config.routing.embed_text_chars,
    )
    .await
    {
        Ok(embeddings) => embeddings,
        Err(e) => {
            warn!(error = %e, "room embeddings unavailable, embedding fallback disabled");
            RoomEmbeddings::from_vectors(Vec::new())
        }
    };

    let selector = RoomSelector::new(
        chat.clone(),
        embedder.clone(),
        config.llm.chat_model.clone(),
        config.routing.min_similarity,
    );
    let generator = Generator::new(chat.clone(), &config.llm, &config.generation);

    let state = Arc::new(AppState {
        index,
        embeddings,
        selector,
        generator,
        routing: config.routing.clone(),
    });

    let app = router(state.clone());
    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.server.bind_addr))?;
    info!(
        addr = %config.server.bind_addr,
        rooms = state.index.len(),
        chat_model = %config.llm.chat_model,
        "docent listening"
    );
    axum::serve(listener, app).await.context("serving")?;
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("DOCENT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
