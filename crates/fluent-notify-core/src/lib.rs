//! Core systems for fluent-notify.
//!
//! This crate provides the field framework that the builder DSL is made of:
//!
//! - **Fields**: validated read/write slots with `Optional`/`Required`
//!   nullability and `Multi`/`Once` write cardinality
//! - **Resource fallback**: a field that was never written can resolve its
//!   value from a [`ResourceTable`] through a recorded resource id
//! - **Error taxonomy**: the construction-time failures that abort building
//!
//! A builder declares each configurable value as a [`Field`] and routes all
//! reads and writes through it, so the "direct value or resource id" duality
//! and the required/optional rules live in one place instead of being
//! re-validated per field.
//!
//! # Example
//!
//! ```
//! use fluent_notify_core::{Field, MapResourceTable, ResourceId};
//!
//! let table = MapResourceTable::new().with_text(ResourceId(42), "Hello");
//!
//! let mut title: Field<String> = Field::required("Example", "title");
//! title.set_res(ResourceId(42));
//!
//! // Never written directly: the resource id is resolved on read.
//! assert_eq!(title.resolve(&table).unwrap(), Some("Hello".to_owned()));
//!
//! // A direct write always takes precedence.
//! title.set("Bye".to_owned()).unwrap();
//! assert_eq!(title.resolve(&table).unwrap(), Some("Bye".to_owned()));
//! ```

mod error;
mod field;
pub mod logging;
mod resource;

pub use error::{Error, Result};
pub use field::{Cardinality, Field, Nullability, Policy};
pub use resource::{
    resolve_kind, FromResource, ImageRef, MapResourceTable, ResourceId, ResourceTable,
    ResourceValue, SemanticKind,
};
