//! Named route registry
//!
//! Maps route names such as `GetEmployeeForCompany` to their method and path
//! template, and resolves them into absolute URIs for hypermedia links. The
//! templates are the same strings the router is built from, so links and
//! routes cannot drift apart.

use crate::core::error::{AppError, AppResult};
use axum::http::Method;
use std::collections::HashMap;
use url::Url;

/// A route that links can point to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRoute {
    pub name: &'static str,
    pub method: Method,
    /// Path template with `{param}` placeholders
    pub template: &'static str,
}

impl NamedRoute {
    pub fn new(name: &'static str, method: Method, template: &'static str) -> Self {
        Self {
            name,
            method,
            template,
        }
    }
}

/// Registry for resolving route names to URIs
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: HashMap<&'static str, NamedRoute>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route; a later registration under the same name replaces it
    pub fn register(&mut self, route: NamedRoute) {
        self.routes.insert(route.name, route);
    }

    pub fn get(&self, name: &str) -> Option<&NamedRoute> {
        self.routes.get(name)
    }

    /// All registered route names
    pub fn route_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.routes.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Resolve a named route into an absolute URI under `base`
    ///
    /// Placeholders are filled from `values`; values not consumed by the path
    /// become query parameters, and empty ones are dropped.
    pub fn uri_for(&self, base: &Url, name: &str, values: &[(&str, String)]) -> AppResult<String> {
        let route = self
            .get(name)
            .ok_or_else(|| AppError::Internal(format!("No route named '{}'", name)))?;

        let mut used: Vec<&str> = Vec::new();
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| AppError::Internal(format!("'{}' cannot be a base URL", base)))?;
            segments.pop_if_empty();

            for segment in route.template.split('/').filter(|s| !s.is_empty()) {
                match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(param) => {
                        let (key, value) = values
                            .iter()
                            .find(|(key, _)| *key == param)
                            .ok_or_else(|| {
                                AppError::Internal(format!(
                                    "Route '{}' needs a value for '{}'",
                                    name, param
                                ))
                            })?;
                        used.push(*key);
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        let extra: Vec<_> = values
            .iter()
            .filter(|(key, value)| !used.contains(key) && !value.is_empty())
            .collect();
        if !extra.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in extra {
                query.append_pair(key, value);
            }
        }

        Ok(url.to_string())
    }
}
