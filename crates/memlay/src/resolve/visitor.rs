//! The layout visitor.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::marker::{StructDescriptor, TypeDescriptor, UnionDescriptor};
use crate::platform::PlatformContext;
use crate::resolve::{AccessorType, ResolvedLayout};
use crate::schema::Schema;

fn align_up(value: usize, align: usize) -> usize {
    value.div_ceil(align) * align
}

/// Walks a descriptor graph and computes its layout under one context.
///
/// The visitor tracks the stack of nominal names currently being laid out;
/// re-entering a name means the composite contains itself by value, which is
/// rejected rather than expanded. Pointers never visit their pointee (their
/// layout is one pointer-width slot regardless), so pointer indirection
/// breaks any cycle structurally.
pub struct Visitor<'a> {
    context: PlatformContext,
    schema: Option<&'a Schema>,
    visiting: Vec<Arc<str>>,
}

impl<'a> Visitor<'a> {
    pub fn with_context(context: PlatformContext) -> Self {
        Self {
            context,
            schema: None,
            visiting: Vec::new(),
        }
    }

    pub fn in_schema(mut self, schema: &'a Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn context(&self) -> PlatformContext {
        self.context
    }

    /// Resolve `descriptor` into a concrete accessor type.
    pub fn visit(&mut self, descriptor: &TypeDescriptor) -> Result<AccessorType> {
        debug!("resolving {} under {}", descriptor, self.context);

        let layout = self.layout_of(descriptor)?;

        Ok(AccessorType {
            descriptor: descriptor.clone(),
            context: self.context,
            layout,
            writable: descriptor.mutable(),
        })
    }

    fn layout_of(&mut self, descriptor: &TypeDescriptor) -> Result<ResolvedLayout> {
        match descriptor {
            TypeDescriptor::Primitive(primitive) => Ok(ResolvedLayout::scalar(
                primitive.size(self.context),
                primitive.align(self.context),
            )),
            // One pointer-width slot; the pointee never contributes to the
            // layout and is not visited.
            TypeDescriptor::Pointer(_) => {
                let size = self.context.pointer_size();
                Ok(ResolvedLayout::scalar(size, size))
            }
            TypeDescriptor::Array(array) => {
                let Some(length) = array.length else {
                    return Err(Error::UnsizedArray {
                        context: "resolved standalone".into(),
                    });
                };
                let element = self.layout_of(&array.element)?;
                Ok(ResolvedLayout::scalar(element.size * length, element.align))
            }
            TypeDescriptor::DynamicFill(fill) => fill
                .lookup(self.context.bits, self.context.platform)
                .map(|len| ResolvedLayout::scalar(len, 1))
                .ok_or(Error::MissingFillEntry {
                    bits: self.context.bits,
                    platform: self.context.platform,
                }),
            TypeDescriptor::Struct(descriptor) => self.layout_of_struct(descriptor),
            TypeDescriptor::Union(descriptor) => self.layout_of_union(descriptor),
            TypeDescriptor::Named(name) => self.layout_of_named(name),
            TypeDescriptor::Template(kind) => Err(Error::CannotDerive(*kind)),
            TypeDescriptor::Void => Err(Error::VoidNotDerivable),
        }
    }

    fn layout_of_named(&mut self, name: &Arc<str>) -> Result<ResolvedLayout> {
        if self.visiting.iter().any(|visited| visited == name) {
            return Err(Error::RecursiveLayout(name.to_string()));
        }

        let target = self
            .schema
            .and_then(|schema| schema.get(name))
            .ok_or_else(|| Error::UnknownType(name.to_string()))?
            .clone();

        self.visiting.push(Arc::clone(name));
        let layout = self.layout_of(&target);
        self.visiting.pop();
        layout
    }

    fn layout_of_struct(&mut self, descriptor: &StructDescriptor) -> Result<ResolvedLayout> {
        let pointer_size = self.context.pointer_size();
        let mut offsets = BTreeMap::new();

        // The vtable slot sits before field 0 and is pointer-aligned.
        let mut cursor = if descriptor.vtable { pointer_size } else { 0 };
        let mut align = if descriptor.vtable && !descriptor.packed {
            pointer_size
        } else {
            1
        };

        let last = descriptor.fields.len().saturating_sub(1);

        for (index, field) in descriptor.fields.iter().enumerate() {
            // Flexible tail: contributes no size, but its element alignment
            // still places its offset and widens the struct alignment.
            if let TypeDescriptor::Array(array) = &field.ty {
                if array.length.is_none() {
                    if index != last {
                        return Err(Error::UnsizedArray {
                            context: format!("field `{}` is not the final field", field.name),
                        });
                    }
                    let element = self.layout_of(&array.element)?;
                    let offset = if descriptor.packed {
                        cursor
                    } else {
                        align = align.max(element.align);
                        align_up(cursor, element.align)
                    };
                    trace!("field `{}` (flexible) at offset {}", field.name, offset);
                    offsets.insert(field.name.clone(), offset);
                    cursor = offset;
                    continue;
                }
            }

            let layout = self.layout_of(&field.ty)?;
            let offset = if descriptor.packed {
                cursor
            } else {
                align = align.max(layout.align);
                align_up(cursor, layout.align)
            };
            trace!("field `{}` at offset {} (size {})", field.name, offset, layout.size);
            offsets.insert(field.name.clone(), offset);
            cursor = offset + layout.size;
        }

        let size = if descriptor.packed {
            cursor
        } else {
            align_up(cursor, align)
        };

        Ok(ResolvedLayout {
            size,
            align,
            offsets,
        })
    }

    fn layout_of_union(&mut self, descriptor: &UnionDescriptor) -> Result<ResolvedLayout> {
        let mut size = 0;
        let mut align = 1;
        let mut offsets = BTreeMap::new();

        for member in &descriptor.members {
            let layout = self.layout_of(&member.ty)?;
            size = size.max(layout.size);
            align = align.max(layout.align);
            offsets.insert(member.name.clone(), 0);
        }

        Ok(ResolvedLayout {
            size: align_up(size, align),
            align,
            offsets,
        })
    }
}
