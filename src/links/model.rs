//! Hypermedia link types

use crate::core::shaping::ShapedEntity;
use serde::Serialize;

/// A single hypermedia control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
    pub method: String,
}

impl Link {
    pub fn new(href: impl Into<String>, rel: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            method: method.into(),
        }
    }
}

/// A shaped entity followed by its `links` array
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedEntity {
    #[serde(flatten)]
    pub entity: ShapedEntity,
    pub links: Vec<Link>,
}

/// Collection body when links are negotiated: `{ "value": [...], "links": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkCollectionWrapper<T> {
    pub value: Vec<T>,
    pub links: Vec<Link>,
}

/// Outcome of link building: either plain shaped rows or a linked collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LinkResponse {
    Shaped(Vec<ShapedEntity>),
    Linked(LinkCollectionWrapper<LinkedEntity>),
}

impl LinkResponse {
    pub fn has_links(&self) -> bool {
        matches!(self, LinkResponse::Linked(_))
    }

    /// Number of entities carried, links aside
    pub fn len(&self) -> usize {
        match self {
            LinkResponse::Shaped(rows) => rows.len(),
            LinkResponse::Linked(wrapper) => wrapper.value.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Single-entity counterpart of [`LinkResponse`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityResponse {
    Shaped(ShapedEntity),
    Linked(LinkedEntity),
}

impl EntityResponse {
    pub fn has_links(&self) -> bool {
        matches!(self, EntityResponse::Linked(_))
    }

    pub fn entity(&self) -> &ShapedEntity {
        match self {
            EntityResponse::Shaped(entity) => entity,
            EntityResponse::Linked(linked) => &linked.entity,
        }
    }
}
