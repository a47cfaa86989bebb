pub mod app;
pub mod handlers;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::info;

use crate::graphql::GraphQLContext;
use crate::store::LibraryStore;

pub async fn start_server(
    port: u16,
    cors_origin: Option<&str>,
    link_books_by_author_id: bool,
) -> Result<()> {
    let store = Arc::new(RwLock::new(LibraryStore::seeded()));
    let context = GraphQLContext::new(store, link_books_by_author_id);

    let app = app::create_app(context, cors_origin).await?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                     - Health check");
    info!("  /graphql                    - GraphQL API & Playground");
}
