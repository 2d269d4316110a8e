//! Core types for declarative JSON object mapping.
//!
//! This crate provides the pieces every mapping pass is built from:
//!
//! - [`Direction`] - Decoding (JSON → object) or encoding (object → JSON)
//! - [`Cursor`] - The JSON map of one object level, indexed by key
//! - [`Binding`] - A cursor positioned at one key, consumed by one field bind
//! - [`Mappable`] - The contract domain types implement to declare their keys
//! - [`bind`] - The field binding operation, dispatched on the field's type
//! - [`MappingConfig`] - Mismatch and malformed-element policies
//! - [`MappingError`] - Errors raised by entry points and strict policies
//!
//! # Architecture
//!
//! ```text
//! jsonsz-core (this crate)
//!    │   cursor, mappable   one object level, one key at a time
//!    │   field              category dispatch and `bind`
//!    │   reverse / forward  JSON → field / field → JSON conversions
//!    │
//!    └─── jsonsz            (decode/encode entry points)
//! ```
//!
//! A decode pass creates a decoding cursor over the source map, constructs the
//! target with `Default`, and runs its [`Mappable::describe_mapping`]. Every
//! nested object gets a fresh cursor, so an inner object's field walk never
//! sees the outer object's keys.

pub mod config;
pub mod cursor;
pub mod direction;
pub mod error;
pub mod field;
mod forward;
pub mod mappable;
mod reverse;


pub use config::{ElementPolicy, MappingConfig, MismatchPolicy};
pub use cursor::{element_path, join_path, report_mismatch, Binding, Cursor};
pub use direction::Direction;
pub use error::{json_kind, MappingError, Result};
pub use field::{bind, Bind, Converted, JsonField};
pub use mappable::{decode_object, encode_object, Mappable};
