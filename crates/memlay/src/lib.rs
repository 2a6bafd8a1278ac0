//! # memlay
//!
//! Declarative memory-layout descriptors for live-process schemas.
//!
//! This crate provides:
//! - A closed vocabulary of composable type descriptors: primitives,
//!   pointers/refs, arrays, structs, unions and platform-conditional padding
//! - Constructor functions that parametrize the generic templates into
//!   concrete, resolvable descriptor values
//! - A resolution engine mapping (descriptor, platform context) to a concrete
//!   layout: size, alignment and per-field offsets
//! - A named schema registry with JSON persistence
//!
//! Descriptors are immutable plain data; resolution is pure and deterministic,
//! so a once-built schema can be resolved concurrently without locking. The
//! actual read/write primitives against a live process belong to the
//! embedding runtime, represented here only by the [`state::TargetState`]
//! capability.

pub mod error;
pub mod marker;
pub mod platform;
pub mod prelude;
pub mod resolve;
pub mod schema;
pub mod state;

pub use error::{Error, Result};
pub use marker::{
    ArrayDescriptor, DynamicFillDescriptor, Field, FillEntry, PointerDescriptor, Primitive,
    StructDescriptor, TemplateKind, TypeDescriptor, UnionDescriptor,
};
pub use platform::{Bits, Platform, PlatformContext};
pub use resolve::{
    AccessorType, ResolvedLayout, Visitor, resolve, resolve_bound, resolve_bound_in, resolve_in,
};
pub use schema::Schema;
pub use state::TargetState;
