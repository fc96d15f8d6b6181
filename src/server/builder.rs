//! ServerBuilder for fluent API to build HTTP servers
//!
//! `build_host` is the one place where configuration, storage, services and
//! routes are wired together.

use super::entity_registry::EntityRegistry;
use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::AppConfig;
use crate::entities::company::CompanyDescriptor;
use crate::entities::employee::EmployeeDescriptor;
use crate::links::LinkBuilder;
use crate::services::ServiceManager;
use crate::storage::{CompanyRepository, EmployeeRepository, InMemoryStore};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(AppConfig::from_env()?)
///     .with_store(InMemoryStore::with_seed_data())
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: Option<AppConfig>,
    companies: Option<Arc<dyn CompanyRepository>>,
    employees: Option<Arc<dyn EmployeeRepository>>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            companies: None,
            employees: None,
        }
    }

    /// Use this configuration instead of the defaults
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the store backing both repositories
    ///
    /// Without one, an [`InMemoryStore`] is created, seeded when
    /// `config.seed` is set.
    pub fn with_store<S>(mut self, store: S) -> Self
    where
        S: CompanyRepository + EmployeeRepository + 'static,
    {
        let store = Arc::new(store);
        let companies: Arc<dyn CompanyRepository> = store.clone();
        let employees: Arc<dyn EmployeeRepository> = store;
        self.companies = Some(companies);
        self.employees = Some(employees);
        self
    }

    /// Build the shared host
    pub fn build_host(self) -> Result<ServerHost> {
        let config = self.config.unwrap_or_default();

        let (companies, employees) = match (self.companies, self.employees) {
            (Some(companies), Some(employees)) => (companies, employees),
            _ => {
                let store = Arc::new(if config.seed {
                    InMemoryStore::with_seed_data()
                } else {
                    InMemoryStore::new()
                });
                let companies: Arc<dyn CompanyRepository> = store.clone();
                let employees: Arc<dyn EmployeeRepository> = store;
                (companies, employees)
            }
        };

        let mut entity_registry = EntityRegistry::new();
        entity_registry.register(Box::new(CompanyDescriptor));
        entity_registry.register(Box::new(EmployeeDescriptor));

        let routes = Arc::new(entity_registry.route_registry());
        let link_builder = Arc::new(
            LinkBuilder::new(routes.clone()).with_marker(config.api.hypermedia_marker.clone()),
        );
        let services = Arc::new(ServiceManager::from_repositories(
            companies,
            employees,
            link_builder.clone(),
        ));

        tracing::debug!(routes = ?routes.route_names(), "named routes registered");

        Ok(ServerHost::from_builder_components(
            config,
            services,
            routes,
            link_builder,
            entity_registry,
        )?)
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        Ok(RestExposure::build_router(host))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `server.host:server.port` and stops on SIGTERM or Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let host = Arc::new(self.build_host()?);
        let addr = host.config.server.bind_address();
        let app = RestExposure::build_router(host);
        let listener = TcpListener::bind(&addr).await?;

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
            Ok(mut stream) => {
                stream.recv().await;
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
