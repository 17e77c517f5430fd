use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use docuchat::application::ports::{DocumentStore, TextSplitter};
use docuchat::application::services::{ChatService, UploadService};
use docuchat::infrastructure::llm::GeminiClient;
use docuchat::infrastructure::observability::{init_tracing, TracingConfig};
use docuchat::infrastructure::persistence::InMemoryDocumentStore;
use docuchat::infrastructure::text_processing::{
    CompositeFileLoader, RecursiveCharacterSplitter,
};
use docuchat::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let file_loader = Arc::new(CompositeFileLoader::new());
    let text_splitter: Arc<dyn TextSplitter> = Arc::new(RecursiveCharacterSplitter::new(
        settings.chunking.max_chunk_size,
    ));
    let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());

    // A missing key is not fatal at startup; uploads and chat fail with a
    // server error until the credential is configured.
    let llm_client = settings
        .llm
        .api_key
        .clone()
        .map(|key| Arc::new(GeminiClient::new(key, settings.llm.model.clone())));

    if llm_client.is_none() {
        tracing::warn!("GOOGLE_API_KEY is not set; upload and chat will fail until configured");
    }

    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&file_loader),
        llm_client.clone(),
        Arc::clone(&text_splitter),
        Arc::clone(&store),
    ));

    let chat_service = Arc::new(ChatService::new(
        llm_client,
        Arc::clone(&store),
        settings.chat.context_budget,
    ));

    let state = AppState {
        upload_service,
        chat_service,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
