//! The marker vocabulary: primitive leaves, structural descriptors and the
//! constructor functions that parametrize them.

pub mod build;
mod descriptor;
mod primitive;

pub use descriptor::{
    ArrayDescriptor, DynamicFillDescriptor, Field, FillEntry, PointerDescriptor, StructDescriptor,
    TemplateKind, TypeDescriptor, UnionDescriptor,
};
pub use primitive::Primitive;
