//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::AppConfig;
use crate::core::error::TaskboardResult;
use crate::core::service::{PropertySource, TaskService};
use crate::storage::{InMemoryTaskService, StaticPropertySource};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the HTTP server
///
/// Services that are not supplied fall back to the in-memory task store and
/// the demo property records.
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(AppConfig::from_yaml_file("taskboard.yaml")?)
///     .with_task_service(InMemoryTaskService::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    task_service: Option<Arc<dyn TaskService>>,
    property_source: Option<Arc<dyn PropertySource>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default_config(),
            task_service: None,
            property_source: None,
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the task service
    pub fn with_task_service(mut self, service: impl TaskService + 'static) -> Self {
        self.task_service = Some(Arc::new(service));
        self
    }

    /// Set the source of property records for the listing
    pub fn with_property_source(mut self, source: impl PropertySource + 'static) -> Self {
        self.property_source = Some(Arc::new(source));
        self
    }

    /// Add custom routes to the server
    ///
    /// Custom routes are merged after the entity routes.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the host after validating the configuration
    pub fn build_host(self) -> TaskboardResult<ServerHost> {
        self.config.validate()?;

        let task_service = self
            .task_service
            .unwrap_or_else(|| Arc::new(InMemoryTaskService::new()));
        let property_source = self
            .property_source
            .unwrap_or_else(|| Arc::new(StaticPropertySource::demo()));

        Ok(ServerHost::from_builder_components(
            self.config,
            task_service,
            property_source,
        ))
    }

    /// Build the final REST router
    pub fn build(mut self) -> TaskboardResult<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        Ok(RestExposure::build_router(host, custom_routes))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr`, serves requests, and stops on SIGTERM or Ctrl+C.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
