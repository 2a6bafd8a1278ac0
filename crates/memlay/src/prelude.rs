//! Prelude module for convenient imports
//!
//! ```ignore
//! use memlay::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Descriptor types: `TypeDescriptor`, `Primitive`, `StructDescriptor`,
//!   `UnionDescriptor`, `Field`, `FillEntry`
//! - Constructor functions: `pointer`, `mut_pointer`, `ref_to`, `mut_ref`,
//!   `array`, `mut_array`, `dynamic_fill`, `fill`, `named`
//! - Platform context: `Bits`, `Platform`, `PlatformContext`
//! - Resolution: `resolve`, `resolve_in`, `resolve_bound`, `AccessorType`
//! - Error handling: `Error`, `Result`

// Descriptor vocabulary
pub use crate::marker::{
    Field, FillEntry, Primitive, StructDescriptor, TemplateKind, TypeDescriptor, UnionDescriptor,
};

// Constructor functions
pub use crate::marker::build::{
    array, dynamic_fill, fill, mut_array, mut_pointer, mut_ref, named, opaque_pointer, pointer,
    ref_to,
};

// Platform context
pub use crate::platform::{Bits, Platform, PlatformContext};

// Resolution engine
pub use crate::resolve::{
    AccessorType, ResolvedLayout, resolve, resolve_bound, resolve_bound_in, resolve_in,
};

// Schema registry and live-state capability
pub use crate::schema::Schema;
pub use crate::state::TargetState;

// Error handling
pub use crate::error::{Error, Result};
