//! # ecl_component
//!
//! The vocabulary shared between the entity layer and the host engine.
//!
//! This crate provides:
//!
//! - [`Component`] trait — the contract for game-logic data a host object can carry.
//! - [`ObjectId`] — lightweight `u64` identifiers for host objects.
//! - [`ObjectAllocator`] — monotonically increasing ID allocator for hosts.
//! - [`Filter`] — an AND-query over a set of component types.
//! - [`ComponentSet`] — tuples of component types a [`Filter`] can be built from.

pub mod component;
pub mod filter;
pub mod object;

pub use component::{Component, ComponentTypeId};
pub use filter::{ComponentSet, Filter};
pub use object::{ObjectAllocator, ObjectId};
