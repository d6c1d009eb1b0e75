//! Application state - shared across all handlers.

use std::sync::Arc;

use gazette_core::ports::PostRepository;
use gazette_infra::database::{DatabaseConfig, DatabaseConnections, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use gazette_infra::database::PostgresPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (db, posts): (Option<Arc<DatabaseConnections>>, Arc<dyn PostRepository>) = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let repo = Arc::new(PostgresPostRepository::new(conn.main.clone()));
                        (Some(conn), repo)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, Arc::new(InMemoryPostRepository::new()))
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, Arc::new(InMemoryPostRepository::new()))
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (db, posts): (Option<Arc<DatabaseConnections>>, Arc<dyn PostRepository>) = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            (None, Arc::new(InMemoryPostRepository::new()))
        };

        tracing::info!("Application state initialized");

        Self { posts, db }
    }

    /// State backed purely by the in-memory repository.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            db: None,
        }
    }
}
