//! Descriptor graph nodes.
//!
//! Descriptors are plain immutable data. Everything an accessor needs to know
//! about a layout is a field on the descriptor value; resolution never mutates
//! the graph. Sharing (and the only possible form of self-reference, through
//! [`TypeDescriptor::Named`]) goes through `Arc`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::marker::Primitive;
use crate::platform::{Bits, Platform};

/// The unparametrized generic descriptors.
///
/// A bare template carries no type arguments and can never be resolved; it
/// exists so that "you forgot to parametrize this" is a first-class,
/// reportable state rather than a panic.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TemplateKind {
    Pointer,
    Array,
    Struct,
    Union,
    DynamicFill,
}

/// A parametrized pointer.
///
/// `mutable` only gates the downstream accessor's write capability and
/// `auto_deref` marks the `Ref`/`MutRef` views that dereference on access;
/// neither changes the layout, which is always one pointer-width slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerDescriptor {
    pub pointee: Arc<TypeDescriptor>,
    #[serde(default)]
    pub signed: bool,
    #[serde(default)]
    pub mutable: bool,
    #[serde(default)]
    pub auto_deref: bool,
}

/// A parametrized array. `length = None` is a flexible array, legal only as
/// the final field of a struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayDescriptor {
    pub element: Arc<TypeDescriptor>,
    pub length: Option<usize>,
    #[serde(default)]
    pub mutable: bool,
}

/// One row of a dynamic-fill table. `bits = None` applies to either width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillEntry {
    #[serde(default)]
    pub bits: Option<Bits>,
    pub platform: Platform,
    pub len: usize,
}

impl FillEntry {
    /// Entry covering both bit widths of a platform.
    pub fn new(platform: Platform, len: usize) -> Self {
        Self {
            bits: None,
            platform,
            len,
        }
    }

    /// Entry pinned to one (bits, platform) pair.
    pub fn for_bits(bits: Bits, platform: Platform, len: usize) -> Self {
        Self {
            bits: Some(bits),
            platform,
            len,
        }
    }
}

/// Platform-conditional opaque padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicFillDescriptor {
    pub entries: Vec<FillEntry>,
}

impl DynamicFillDescriptor {
    /// Byte count for a context. An exact `(bits, platform)` entry wins over a
    /// width-agnostic one; no entry at all means the fill is not defined for
    /// this context.
    pub fn lookup(&self, bits: Bits, platform: Platform) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.bits == Some(bits) && entry.platform == platform)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|entry| entry.bits.is_none() && entry.platform == platform)
            })
            .map(|entry| entry.len)
    }
}

/// A named member of a struct or union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: TypeDescriptor,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// An ordered sequence of fields laid out with C alignment rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDescriptor {
    /// Nominal name, used for schema registration and error reporting.
    #[serde(default)]
    pub name: Option<String>,
    pub fields: Vec<Field>,
    /// Reserve one pointer-width slot before field 0 for a vtable pointer.
    #[serde(default)]
    pub vtable: bool,
    /// Zero inter-field padding, alignment 1, no tail rounding.
    #[serde(default)]
    pub packed: bool,
}

impl StructDescriptor {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            name: None,
            fields,
            vtable: false,
            packed: false,
        }
    }

    pub fn named(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(fields)
        }
    }

    pub fn with_vtable(mut self) -> Self {
        self.vtable = true;
        self
    }

    pub fn packed(mut self) -> Self {
        self.packed = true;
        self
    }
}

/// Overlapping members, every one at offset 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    pub members: Vec<Field>,
}

impl UnionDescriptor {
    pub fn new(members: Vec<Field>) -> Self {
        Self {
            name: None,
            members,
        }
    }

    pub fn named(name: impl Into<String>, members: Vec<Field>) -> Self {
        Self {
            name: Some(name.into()),
            members,
        }
    }
}

/// A composable, platform-agnostic description of a memory layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDescriptor {
    Primitive(Primitive),
    Pointer(PointerDescriptor),
    Array(ArrayDescriptor),
    DynamicFill(DynamicFillDescriptor),
    Struct(StructDescriptor),
    Union(UnionDescriptor),
    /// Nominal reference, resolved through a [`Schema`](crate::schema::Schema).
    Named(Arc<str>),
    /// An unparametrized template; never derivable.
    Template(TemplateKind),
    /// Zero-size sentinel; legal only as a pointer's pointee.
    Void,
}

impl TypeDescriptor {
    /// Whether resolution can ever succeed for this node. Templates and
    /// `Void` stay non-derivable forever; parametrizing a template produces a
    /// different, derivable value.
    pub fn derivable(&self) -> bool {
        !matches!(self, TypeDescriptor::Template(_) | TypeDescriptor::Void)
    }

    /// Write capability of the outermost view. Only read-only pointer and
    /// array views withhold it; direct values are written through their owner.
    pub fn mutable(&self) -> bool {
        match self {
            TypeDescriptor::Pointer(pointer) => pointer.mutable,
            TypeDescriptor::Array(array) => array.mutable,
            _ => true,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeDescriptor::Primitive(_) => "primitive",
            TypeDescriptor::Pointer(_) => "pointer",
            TypeDescriptor::Array(_) => "array",
            TypeDescriptor::DynamicFill(_) => "dynamic_fill",
            TypeDescriptor::Struct(_) => "struct",
            TypeDescriptor::Union(_) => "union",
            TypeDescriptor::Named(_) => "named",
            TypeDescriptor::Template(_) => "template",
            TypeDescriptor::Void => "void",
        }
    }
}

impl From<Primitive> for TypeDescriptor {
    fn from(primitive: Primitive) -> Self {
        TypeDescriptor::Primitive(primitive)
    }
}

impl From<StructDescriptor> for TypeDescriptor {
    fn from(descriptor: StructDescriptor) -> Self {
        TypeDescriptor::Struct(descriptor)
    }
}

impl From<UnionDescriptor> for TypeDescriptor {
    fn from(descriptor: UnionDescriptor) -> Self {
        TypeDescriptor::Union(descriptor)
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeDescriptor::Primitive(primitive) => write!(f, "{primitive}"),
            TypeDescriptor::Pointer(pointer) => {
                let name = match (pointer.auto_deref, pointer.mutable) {
                    (false, false) => "pointer",
                    (false, true) => "mut_pointer",
                    (true, false) => "ref",
                    (true, true) => "mut_ref",
                };
                write!(f, "{name}({})", pointer.pointee)
            }
            TypeDescriptor::Array(array) => match array.length {
                Some(length) => write!(f, "array({}, {length})", array.element),
                None => write!(f, "array({})", array.element),
            },
            TypeDescriptor::DynamicFill(_) => write!(f, "dynamic_fill"),
            TypeDescriptor::Struct(descriptor) => match &descriptor.name {
                Some(name) => write!(f, "struct {name}"),
                None => write!(f, "struct"),
            },
            TypeDescriptor::Union(descriptor) => match &descriptor.name {
                Some(name) => write!(f, "union {name}"),
                None => write!(f, "union"),
            },
            TypeDescriptor::Named(name) => write!(f, "{name}"),
            TypeDescriptor::Template(kind) => write!(f, "{kind}"),
            TypeDescriptor::Void => write!(f, "void"),
        }
    }
}
