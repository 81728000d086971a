//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::build_router;
use crate::config::AppConfig;
use crate::services::Services;
use crate::storage::UnitOfWork;
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

/// Builder wiring configuration, storage and services into a router
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(AppConfig::from_yaml_file("config.yaml")?)
///     .with_unit_of_work(UnitOfWork::in_memory(customers, products))
///     .build();
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    unit_of_work: Option<UnitOfWork>,
}

impl ServerBuilder {
    /// Create a builder with default configuration and empty storage
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            unit_of_work: None,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the repositories the services read from
    pub fn with_unit_of_work(mut self, unit_of_work: UnitOfWork) -> Self {
        self.unit_of_work = Some(unit_of_work);
        self
    }

    /// Handler state for the configured repositories
    pub fn state(&self) -> AppState {
        let unit_of_work = self.unit_of_work.clone().unwrap_or_default();
        AppState::new(Services::new(unit_of_work, self.config.paging.clone()))
    }

    /// Build the final router
    pub fn build(self) -> Router {
        build_router(self.state())
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `server.host:server.port` of the configuration and returns
    /// once a Ctrl+C or SIGTERM has been handled.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.addr()?;
        let app = self.build();
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
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    #[tokio::test]
    async fn test_state_uses_given_unit_of_work() {
        let unit_of_work = UnitOfWork::in_memory(Vec::new(), vec![Product::new("Laptop", 999.0)]);
        let state = ServerBuilder::new().with_unit_of_work(unit_of_work).state();

        let products = state.services.get_products.execute().await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_default_builder_has_empty_storage() {
        let state = ServerBuilder::default().state();
        assert!(state.services.get_products.execute().await.unwrap().is_empty());
    }

    #[test]
    fn test_build_router() {
        let _router: Router = ServerBuilder::new().build();
    }
}
