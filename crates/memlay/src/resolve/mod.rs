//! Resolution engine: descriptor graph + platform context -> concrete layout.
//!
//! All entry points funnel into one [`Visitor`]. Resolution is pure; the same
//! (descriptor, context) pair always yields the same [`ResolvedLayout`].

mod visitor;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::marker::TypeDescriptor;
use crate::platform::PlatformContext;
use crate::schema::Schema;
use crate::state::TargetState;

pub use visitor::Visitor;

/// Concrete layout of a descriptor under one platform context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLayout {
    pub size: usize,
    pub align: usize,
    /// Per-field offsets; populated for composites only.
    pub offsets: BTreeMap<String, usize>,
}

impl ResolvedLayout {
    /// Layout of a leaf with no fields.
    pub fn scalar(size: usize, align: usize) -> Self {
        Self {
            size,
            align,
            offsets: BTreeMap::new(),
        }
    }

    pub fn offset_of(&self, field: &str) -> Option<usize> {
        self.offsets.get(field).copied()
    }
}

/// A resolved accessor type: the descriptor, the context it was resolved
/// under and the computed layout. This is what the (external) memory accessor
/// layer instantiates against a live base address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessorType {
    pub descriptor: TypeDescriptor,
    pub context: PlatformContext,
    pub layout: ResolvedLayout,
    /// Write capability of the outermost view.
    pub writable: bool,
}

impl AccessorType {
    pub fn size(&self) -> usize {
        self.layout.size
    }

    pub fn align(&self) -> usize {
        self.layout.align
    }

    pub fn offset_of(&self, field: &str) -> Option<usize> {
        self.layout.offset_of(field)
    }
}

/// Resolve a descriptor against an explicit platform context.
pub fn resolve(descriptor: &TypeDescriptor, context: PlatformContext) -> Result<AccessorType> {
    Visitor::with_context(context).visit(descriptor)
}

/// Resolve a descriptor against an explicit context, with nominal references
/// looked up in `schema`.
pub fn resolve_in(
    descriptor: &TypeDescriptor,
    schema: &Schema,
    context: PlatformContext,
) -> Result<AccessorType> {
    Visitor::with_context(context).in_schema(schema).visit(descriptor)
}

/// Resolve a descriptor against the context of a live target state.
pub fn resolve_bound(descriptor: &TypeDescriptor, state: &impl TargetState) -> Result<AccessorType> {
    resolve(descriptor, state.context())
}

/// [`resolve_bound`] with nominal references looked up in `schema`.
pub fn resolve_bound_in(
    descriptor: &TypeDescriptor,
    schema: &Schema,
    state: &impl TargetState,
) -> Result<AccessorType> {
    resolve_in(descriptor, schema, state.context())
}
