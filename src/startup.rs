//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::application::services::{
    MessageService, MessageServiceImpl, UserService, UserServiceImpl,
};
use crate::config::{Settings, StoreBackend};
use crate::domain::{MessageRepository, UserRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    InMemoryMessageRepository, InMemoryUserRepository, PgMessageRepository, PgUserRepository,
};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};
use crate::shared::id::IdGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub messages: Arc<dyn MessageService>,
    /// Used directly by readiness probes
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    /// Wire both services over the given repositories.
    pub fn from_repositories<U, M>(user_repo: Arc<U>, message_repo: Arc<M>) -> Self
    where
        U: UserRepository + 'static,
        M: MessageRepository + 'static,
    {
        let id_generator = Arc::new(IdGenerator::new());

        Self {
            users: Arc::new(UserServiceImpl::new(user_repo.clone(), id_generator.clone())),
            messages: Arc::new(MessageServiceImpl::new(
                message_repo,
                user_repo.clone(),
                id_generator,
            )),
            user_repo,
        }
    }

    /// State backed by empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::from_repositories(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryMessageRepository::new()),
        )
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let state = match settings.store.backend {
            StoreBackend::Postgres => {
                let db = database::create_pool(&settings.database).await?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&db).await?;
                    tracing::info!("Database migrations applied");
                }

                AppState::from_repositories(
                    Arc::new(PgUserRepository::new(db.clone())),
                    Arc::new(PgMessageRepository::new(db)),
                )
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; data will not survive a restart");
                AppState::in_memory()
            }
        };

        health::init_server_start();

        // Build router with middleware
        let router = routes::create_router(state).layer(
            ServiceBuilder::new()
                .layer(logging::create_trace_layer())
                .layer(cors::create_cors_layer(&settings.cors)),
        );

        // Bind to address
        let addr = settings.server.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolve on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
