//! Entity registry for managing entity descriptors and their routes

use super::host::ServerHost;
use crate::links::{NamedRoute, RouteRegistry};
use axum::Router;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Trait that describes how to build routes for an entity
///
/// Each entity (Company, Employee) implements this trait to provide its HTTP
/// routes and the named routes its links point to.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "company")
    fn entity_type(&self) -> &str;

    /// The plural form (e.g., "companies")
    fn plural(&self) -> &str;

    /// Named routes used to resolve links and `Location` headers
    fn named_routes(&self) -> Vec<NamedRoute>;

    /// Build the routes for this entity over the shared host
    fn build_routes(&self, host: Arc<ServerHost>) -> Router;
}

/// Registry for all entities in the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity descriptor under its entity type
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self, host: Arc<ServerHost>) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes(host.clone()))
            })
    }

    /// Collect every descriptor's named routes
    pub fn route_registry(&self) -> RouteRegistry {
        let mut registry = RouteRegistry::new();
        for route in self.descriptors.values().flat_map(|d| d.named_routes()) {
            registry.register(route);
        }
        registry
    }

    /// Get all registered entity types
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    struct MockDescriptor {
        entity_type: &'static str,
        plural: &'static str,
    }

    impl EntityDescriptor for MockDescriptor {
        fn entity_type(&self) -> &str {
            self.entity_type
        }

        fn plural(&self) -> &str {
            self.plural
        }

        fn named_routes(&self) -> Vec<NamedRoute> {
            vec![NamedRoute::new(self.plural, Method::GET, "/things")]
        }

        fn build_routes(&self, _host: Arc<ServerHost>) -> Router {
            Router::new()
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = EntityRegistry::new();
        assert!(registry.entity_types().is_empty());
        assert!(registry.route_registry().route_names().is_empty());
    }

    #[test]
    fn test_register_duplicate_replaces() {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(MockDescriptor {
            entity_type: "order",
            plural: "orders",
        }));
        registry.register(Box::new(MockDescriptor {
            entity_type: "order",
            plural: "commandes",
        }));
        assert_eq!(registry.entity_types(), ["order"]);
        assert_eq!(registry.route_registry().route_names(), ["commandes"]);
    }

    #[test]
    fn test_route_registry_merges_descriptors() {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(MockDescriptor {
            entity_type: "user",
            plural: "users",
        }));
        registry.register(Box::new(MockDescriptor {
            entity_type: "car",
            plural: "cars",
        }));
        assert_eq!(registry.entity_types(), ["car", "user"]);
        assert_eq!(registry.route_registry().route_names(), ["cars", "users"]);
    }
}
