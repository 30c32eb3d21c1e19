//! Main server implementation
//!
//! This module contains the ConferenceServer struct that wires the injected
//! services into an axum router.

use std::sync::Arc;
use std::time::Instant;
use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use shared::{ServerConfig, logging};
use crate::error::{ServerError, ServerResult};
use crate::services::AnnouncementCacheWriter;
use crate::traits::{AnnouncementCache, AnnouncementSource, Datastore, Mailer};
use crate::web::handlers::{api, crons, tasks};

const COMPONENT: &str = "conference-server";

/// Conference server with dependency injection
pub struct ConferenceServer<D, C, M, A> {
    config: Arc<ServerConfig>,
    datastore: Arc<D>,
    cache_writer: AnnouncementCacheWriter<C>,
    mailer: Arc<M>,
    announcement_source: Arc<A>,
    started_at: Instant,
}

impl<D, C, M, A> Clone for ConferenceServer<D, C, M, A> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            datastore: Arc::clone(&self.datastore),
            cache_writer: self.cache_writer.clone(),
            mailer: Arc::clone(&self.mailer),
            announcement_source: Arc::clone(&self.announcement_source),
            started_at: self.started_at,
        }
    }
}

impl<D, C, M, A> ConferenceServer<D, C, M, A>
where
    D: Datastore + 'static,
    C: AnnouncementCache + 'static,
    M: Mailer + 'static,
    A: AnnouncementSource + 'static,
{
    /// Create a new server with dependency injection
    pub fn new(
        config: ServerConfig,
        datastore: Arc<D>,
        cache: C,
        mailer: M,
        announcement_source: A,
    ) -> Self {
        Self {
            config: Arc::new(config),
            datastore,
            cache_writer: AnnouncementCacheWriter::new(cache),
            mailer: Arc::new(mailer),
            announcement_source: Arc::new(announcement_source),
            started_at: Instant::now(),
        }
    }

    /// Build the axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Task queue and cron triggers
            .route("/tasks/check_speakers", post(tasks::check_speakers::<D, C, M, A>))
            .route(
                "/tasks/send_confirmation_email",
                post(tasks::send_confirmation_email::<D, C, M, A>),
            )
            .route("/crons/set_announcement", get(crons::set_announcement::<D, C, M, A>))

            // Cached announcement reads
            .route(
                "/api/conferences/:websafe_key/featured_speaker",
                get(api::featured_speaker::<D, C, M, A>),
            )
            .route("/api/announcement", get(api::announcement::<D, C, M, A>))

            // Health check
            .route("/health", get(api::health_check::<D, C, M, A>))

            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self) -> ServerResult<()> {
        let router = self.build_router();
        let bind_address = self.config.bind_address();

        let listener = tokio::net::TcpListener::bind(&bind_address)
            .await
            .map_err(|e| ServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        info!("🌐 Conference server listening on http://{}", bind_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn datastore(&self) -> &D {
        &self.datastore
    }

    pub fn cache_writer(&self) -> &AnnouncementCacheWriter<C> {
        &self.cache_writer
    }

    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    pub fn announcement_source(&self) -> &A {
        &self.announcement_source
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(COMPONENT, "Received Ctrl+C signal"),
        Err(err) => {
            logging::log_error(COMPONENT, "Signal handling", &err);
            // Without a signal handler, keep serving until the process is killed
            std::future::pending::<()>().await;
        }
    }
}
