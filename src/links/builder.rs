//! Hypermedia link building
//!
//! Each resource describes the controls it offers through [`ResourceLinks`];
//! the [`LinkBuilder`] decides, from the negotiated media type, whether to
//! attach them and resolves them through the [`RouteRegistry`].

use super::model::{EntityResponse, Link, LinkCollectionWrapper, LinkResponse, LinkedEntity};
use super::registry::RouteRegistry;
use crate::core::error::AppResult;
use crate::core::media::{DEFAULT_HYPERMEDIA_MARKER, MediaType};
use crate::core::shaping::ShapedEntity;
use axum::http::Method;
use std::sync::Arc;
use url::Url;
use uuid::Uuid;

/// Per-request inputs of link building
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Scheme, host and optional path prefix links are resolved against
    pub base_url: Url,
    /// Media type negotiated from `Accept`
    pub media_type: MediaType,
}

impl RequestContext {
    pub fn new(base_url: Url, media_type: MediaType) -> Self {
        Self {
            base_url,
            media_type,
        }
    }
}

/// An unresolved link: a named route plus the values that fill it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpec {
    pub route: &'static str,
    pub rel: &'static str,
    pub method: Method,
    pub values: Vec<(&'static str, String)>,
}

impl LinkSpec {
    pub fn new(route: &'static str, rel: &'static str, method: Method) -> Self {
        Self {
            route,
            rel,
            method,
            values: Vec::new(),
        }
    }

    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.values.push((key, value.to_string()));
        self
    }
}

/// The links a resource offers
pub trait ResourceLinks: Send + Sync {
    /// Controls attached to one row; `fields` is the active field spec
    fn entity_links(&self, id: Uuid, fields: &str) -> Vec<LinkSpec>;

    /// Controls attached to the collection wrapper
    fn collection_links(&self) -> Vec<LinkSpec>;
}

/// Attaches links to shaped rows when the client negotiated hypermedia
pub struct LinkBuilder {
    routes: Arc<RouteRegistry>,
    marker: String,
}

impl LinkBuilder {
    pub fn new(routes: Arc<RouteRegistry>) -> Self {
        Self {
            routes,
            marker: DEFAULT_HYPERMEDIA_MARKER.to_string(),
        }
    }

    /// Use a different hypermedia subtype marker
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn routes(&self) -> &RouteRegistry {
        &self.routes
    }

    pub fn should_generate_links(&self, media_type: &MediaType) -> bool {
        media_type.is_hypermedia(&self.marker)
    }

    /// Wrap shaped rows, adding links when the media type asks for them
    pub fn build(
        &self,
        rows: Vec<ShapedEntity>,
        fields: Option<&str>,
        ctx: &RequestContext,
        resource: &dyn ResourceLinks,
    ) -> AppResult<LinkResponse> {
        if !self.should_generate_links(&ctx.media_type) {
            return Ok(LinkResponse::Shaped(rows));
        }

        let fields = fields.unwrap_or_default();
        let value = rows
            .into_iter()
            .map(|entity| {
                let links = self.resolve(&ctx.base_url, resource.entity_links(entity.id, fields))?;
                Ok(LinkedEntity { entity, links })
            })
            .collect::<AppResult<Vec<_>>>()?;

        let links = self.resolve(&ctx.base_url, resource.collection_links())?;
        tracing::debug!(rows = value.len(), "attached hypermedia links");

        Ok(LinkResponse::Linked(LinkCollectionWrapper { value, links }))
    }

    /// Single-row form of [`build`](Self::build); no collection links
    pub fn build_one(
        &self,
        entity: ShapedEntity,
        fields: Option<&str>,
        ctx: &RequestContext,
        resource: &dyn ResourceLinks,
    ) -> AppResult<EntityResponse> {
        if !self.should_generate_links(&ctx.media_type) {
            return Ok(EntityResponse::Shaped(entity));
        }

        let links = self.resolve(
            &ctx.base_url,
            resource.entity_links(entity.id, fields.unwrap_or_default()),
        )?;
        Ok(EntityResponse::Linked(LinkedEntity { entity, links }))
    }

    /// Resolve link specs into absolute links
    pub fn resolve(&self, base: &Url, specs: Vec<LinkSpec>) -> AppResult<Vec<Link>> {
        specs
            .into_iter()
            .map(|spec| {
                let values: Vec<(&str, String)> = spec.values;
                let href = self.routes.uri_for(base, spec.route, &values)?;
                Ok(Link::new(href, spec.rel, spec.method.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::links::registry::NamedRoute;
    use indexmap::IndexMap;

    struct Widgets;

    impl ResourceLinks for Widgets {
        fn entity_links(&self, id: Uuid, fields: &str) -> Vec<LinkSpec> {
            vec![
                LinkSpec::new("GetWidget", "self", Method::GET)
                    .with("id", id)
                    .with("fields", fields),
                LinkSpec::new("DeleteWidget", "delete_widget", Method::DELETE).with("id", id),
            ]
        }

        fn collection_links(&self) -> Vec<LinkSpec> {
            vec![LinkSpec::new("GetWidgets", "self", Method::GET)]
        }
    }

    fn builder() -> LinkBuilder {
        let mut routes = RouteRegistry::new();
        routes.register(NamedRoute::new("GetWidgets", Method::GET, "/widgets"));
        routes.register(NamedRoute::new("GetWidget", Method::GET, "/widgets/{id}"));
        routes.register(NamedRoute::new("DeleteWidget", Method::DELETE, "/widgets/{id}"));
        LinkBuilder::new(Arc::new(routes))
    }

    fn ctx(accept: &str) -> RequestContext {
        RequestContext::new(
            Url::parse("http://localhost").expect("url"),
            MediaType::parse(accept).expect("media"),
        )
    }

    fn row(id: Uuid) -> ShapedEntity {
        let mut fields = IndexMap::new();
        fields.insert("id".to_string(), FieldValue::Uuid(id));
        ShapedEntity { id, fields }
    }

    #[test]
    fn test_plain_media_type_gets_no_links() {
        let id = Uuid::new_v4();
        let response = builder()
            .build(vec![row(id)], None, &ctx("application/json"), &Widgets)
            .expect("build");
        assert!(!response.has_links());
        assert_eq!(response, LinkResponse::Shaped(vec![row(id)]));
    }

    #[test]
    fn test_hypermedia_adds_entity_and_collection_links() {
        let id = Uuid::new_v4();
        let response = builder()
            .build(
                vec![row(id)],
                Some("name"),
                &ctx("application/vnd.acme.hateoas+json"),
                &Widgets,
            )
            .expect("build");
        assert!(response.has_links());

        let LinkResponse::Linked(wrapper) = response else {
            panic!("expected links");
        };
        assert_eq!(wrapper.value.len(), 1);
        assert_eq!(
            wrapper.value[0].links,
            vec![
                Link::new(format!("http://localhost/widgets/{}?fields=name", id), "self", "GET"),
                Link::new(format!("http://localhost/widgets/{}", id), "delete_widget", "DELETE"),
            ]
        );
        assert_eq!(
            wrapper.links,
            vec![Link::new("http://localhost/widgets", "self", "GET")]
        );
    }

    #[test]
    fn test_linked_entity_serializes_fields_then_links() {
        let id = Uuid::new_v4();
        let response = builder()
            .build(
                vec![row(id)],
                None,
                &ctx("application/vnd.acme.hateoas+json"),
                &Widgets,
            )
            .expect("build");
        let json = serde_json::to_value(&response).expect("json");
        assert_eq!(json["value"][0]["id"], id.to_string());
        assert_eq!(json["value"][0]["links"][1]["method"], "DELETE");
        assert_eq!(json["links"][0]["rel"], "self");
    }

    #[test]
    fn test_build_one_attaches_entity_links_only() {
        let id = Uuid::new_v4();
        let response = builder()
            .build_one(row(id), None, &ctx("application/vnd.acme.hateoas+json"), &Widgets)
            .expect("build");
        assert!(response.has_links());
        assert_eq!(response.entity().id, id);

        let json = serde_json::to_value(&response).expect("json");
        assert_eq!(json["links"][0]["href"], format!("http://localhost/widgets/{}", id));
        assert!(json.get("value").is_none());

        let plain = builder()
            .build_one(row(id), None, &ctx("application/json"), &Widgets)
            .expect("build");
        assert!(!plain.has_links());
    }

    #[test]
    fn test_custom_marker() {
        let builder = builder().with_marker("links");
        assert!(builder.should_generate_links(&MediaType::parse("application/vnd.acme.links+json").expect("media")));
        assert!(!builder.should_generate_links(&MediaType::parse("application/vnd.acme.hateoas+json").expect("media")));
    }
}
