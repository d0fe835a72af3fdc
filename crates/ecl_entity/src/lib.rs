//! # ecl_entity
//!
//! Named-entity bookkeeping over objects owned by a host engine.
//!
//! This crate provides:
//!
//! - [`Entity`] — the façade binding one host object to its tags and events.
//! - [`Tags`] / [`IntTag`] — per-entity integer tag sets.
//! - [`Events`] — per-entity named-event publish/subscribe tables.
//! - [`Registry`] — the ordered list of live entities and its linear queries.
//! - [`HostEngine`] — the contract a host engine must satisfy.
//! - [`World`] — the context owning a registry and a host, where entities are
//!   spawned, found, filtered, and destroyed.
//!
//! Everything here is single-threaded: a [`World`] is mutated through
//! `&mut self` and event handlers are not `Send`, so a world stays on the
//! thread that built it.

pub mod config;
pub mod entity;
pub mod error;
pub mod events;
pub mod host;
pub mod registry;
pub mod tags;
pub mod world;

pub use config::WorldConfig;
pub use entity::Entity;
pub use error::{EclError, HostError};
pub use events::{Events, SubscriptionId};
pub use host::{HostEngine, HostEngineExt, PrefabId};
pub use registry::Registry;
pub use tags::{IntTag, Tags};
pub use world::{Placement, SpawnSource, World};

pub use ecl_component::{Component, ComponentSet, ComponentTypeId, Filter, ObjectId};
