//! ERC IR - Extended Result Code Model
//!
//! This crate contains the core data structures for the result code generator:
//! - The 32-bit extended result code layout and its pack/unpack functions
//! - Facility, Component and Result entities
//! - The hierarchy model that enforces uniqueness and range invariants
//!
//! # Bit Layout
//!
//! ```text
//!  31    28 27          20 19                              0
//! +--------+--------------+---------------------------------+
//! |facility|  component   |              value              |
//! | 4 bits |    8 bits    |             20 bits             |
//! +--------+--------------+---------------------------------+
//! ```
//!
//! # Design Philosophy
//!
//! - **Build once, read after**: entities are only created through
//!   [`HierarchyModel`]; once sealed into a [`SealedModel`] nothing can change.
//! - **Flatten handles**: insertion returns small index handles
//!   ([`FacilityId`], [`ComponentId`]) instead of references into the tree.
//! - **Packing never fails**: range policing happens at insertion, the encoder
//!   itself only masks.

mod entity;
pub mod erc;
mod error;
mod hierarchy;

pub use entity::{Component, EntityKind, Facility, ResultCode};
pub use erc::{pack, unpack, ErcFields};
pub use error::{Conflict, DuplicateDefinitionError, ModelError, RangeError};
pub use hierarchy::{ComponentId, FacilityId, HierarchyModel, SealedModel};
