//! Shared server state
//!
//! `ServerHost` holds everything handlers need: configuration, services and
//! the link machinery. It is built once by
//! [`ServerBuilder::build_host`](super::builder::ServerBuilder::build_host)
//! and shared behind an `Arc`.

use super::entity_registry::EntityRegistry;
use crate::config::AppConfig;
use crate::core::error::{AppError, AppResult, ConfigError};
use crate::core::media::MediaType;
use crate::links::{LinkBuilder, RequestContext, RouteRegistry};
use crate::services::ServiceManager;
use axum::http::{HeaderMap, HeaderValue, header::HOST};
use std::sync::Arc;
use url::Url;

pub struct ServerHost {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Company and employee services
    pub services: Arc<ServiceManager>,

    /// Named routes for link and `Location` resolution
    pub routes: Arc<RouteRegistry>,

    pub link_builder: Arc<LinkBuilder>,

    /// Entity registry for HTTP routes
    pub entity_registry: EntityRegistry,

    public_url: Option<Url>,
    fallback_url: Url,
}

impl ServerHost {
    /// Build the host from builder components
    pub fn from_builder_components(
        config: AppConfig,
        services: Arc<ServiceManager>,
        routes: Arc<RouteRegistry>,
        link_builder: Arc<LinkBuilder>,
        entity_registry: EntityRegistry,
    ) -> Result<Self, ConfigError> {
        let public_url = config.public_url()?;
        let bind_address = config.server.bind_address();
        let fallback_url = Url::parse(&format!("http://{}/", bind_address)).map_err(|e| {
            ConfigError::InvalidValue {
                field: "server.host".to_string(),
                message: format!("'{}' is not a valid authority: {}", bind_address, e),
            }
        })?;

        Ok(Self {
            config: Arc::new(config),
            services,
            routes,
            link_builder,
            entity_registry,
            public_url,
            fallback_url,
        })
    }

    /// Get entity types registered in the host
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }

    /// Base URL links are resolved against
    ///
    /// A configured `public_url` wins, then the request's `Host` header, then
    /// the bind address.
    pub fn base_url(&self, headers: &HeaderMap) -> Url {
        if let Some(url) = &self.public_url {
            return url.clone();
        }

        headers
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .and_then(|host| Url::parse(&format!("http://{}/", host)).ok())
            .unwrap_or_else(|| self.fallback_url.clone())
    }

    pub fn request_context(&self, headers: &HeaderMap, media_type: MediaType) -> RequestContext {
        RequestContext::new(self.base_url(headers), media_type)
    }

    /// Absolute URI of a named route, as a `Location` header value
    pub fn location(
        &self,
        headers: &HeaderMap,
        route: &str,
        values: &[(&str, String)],
    ) -> AppResult<HeaderValue> {
        let uri = self.routes.uri_for(&self.base_url(headers), route, values)?;
        HeaderValue::from_str(&uri)
            .map_err(|e| AppError::Internal(format!("invalid location '{}': {}", uri, e)))
    }
}
