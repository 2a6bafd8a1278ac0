//! Constructor functions that parametrize the generic templates.
//!
//! These mirror the declarative authoring surface: `pointer`, `mut_pointer`,
//! `ref_to`, `mut_ref`, `array`, `mut_array`, `dynamic_fill` and `fill`.
//! The values they return are concrete (derivable) descriptors; the bare
//! [`TemplateKind`](super::TemplateKind) values stay non-derivable.

use std::sync::Arc;

use crate::marker::{
    ArrayDescriptor, DynamicFillDescriptor, FillEntry, PointerDescriptor, Primitive,
    TypeDescriptor,
};

fn pointer_to(pointee: TypeDescriptor, signed: bool, mutable: bool, auto_deref: bool) -> TypeDescriptor {
    TypeDescriptor::Pointer(PointerDescriptor {
        pointee: Arc::new(pointee),
        signed,
        mutable,
        auto_deref,
    })
}

/// Read-only pointer to `pointee`.
pub fn pointer(pointee: TypeDescriptor, signed: bool) -> TypeDescriptor {
    pointer_to(pointee, signed, false, false)
}

/// Write-capable pointer to `pointee`.
pub fn mut_pointer(pointee: TypeDescriptor, signed: bool) -> TypeDescriptor {
    pointer_to(pointee, signed, true, false)
}

/// Read-only auto-dereferencing view; layout-identical to [`pointer`].
pub fn ref_to(pointee: TypeDescriptor, signed: bool) -> TypeDescriptor {
    pointer_to(pointee, signed, false, true)
}

/// Write-capable auto-dereferencing view; layout-identical to [`mut_pointer`].
pub fn mut_ref(pointee: TypeDescriptor, signed: bool) -> TypeDescriptor {
    pointer_to(pointee, signed, true, true)
}

/// Opaque pointer: a pointer whose pointee is `Void`.
pub fn opaque_pointer() -> TypeDescriptor {
    pointer(TypeDescriptor::Void, false)
}

/// Read-only array of `element`. `length = None` declares a flexible array,
/// accepted only as the final field of a struct (checked at resolution time).
pub fn array(element: TypeDescriptor, length: Option<usize>) -> TypeDescriptor {
    TypeDescriptor::Array(ArrayDescriptor {
        element: Arc::new(element),
        length,
        mutable: false,
    })
}

/// Write-capable array of `element`.
pub fn mut_array(element: TypeDescriptor, length: Option<usize>) -> TypeDescriptor {
    TypeDescriptor::Array(ArrayDescriptor {
        element: Arc::new(element),
        length,
        mutable: true,
    })
}

/// Platform-conditional opaque padding, built from per-platform byte counts.
pub fn dynamic_fill(entries: impl IntoIterator<Item = FillEntry>) -> TypeDescriptor {
    TypeDescriptor::DynamicFill(DynamicFillDescriptor {
        entries: entries.into_iter().collect(),
    })
}

/// Fixed-size opaque padding: `length` char-sized bytes on every platform.
pub fn fill(length: usize) -> TypeDescriptor {
    array(Primitive::Char.into(), Some(length))
}

/// Nominal reference into a schema.
pub fn named(name: impl AsRef<str>) -> TypeDescriptor {
    TypeDescriptor::Named(Arc::from(name.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::TemplateKind;

    #[test]
    fn test_parametrizing_yields_derivable_values() {
        assert!(pointer(Primitive::Int32.into(), false).derivable());
        assert!(array(Primitive::Uint8.into(), Some(4)).derivable());
        assert!(dynamic_fill([]).derivable());
        assert!(!TypeDescriptor::Template(TemplateKind::Pointer).derivable());
    }

    #[test]
    fn test_ref_is_a_pointer_with_a_tag() {
        let plain = pointer(Primitive::Int32.into(), false);
        let auto = ref_to(Primitive::Int32.into(), false);

        let (TypeDescriptor::Pointer(plain), TypeDescriptor::Pointer(auto)) = (&plain, &auto)
        else {
            panic!("expected pointer descriptors");
        };
        assert_eq!(plain.pointee, auto.pointee);
        assert!(!plain.auto_deref);
        assert!(auto.auto_deref);
    }

    #[test]
    fn test_fill_is_a_fixed_char_array() {
        let TypeDescriptor::Array(array) = fill(12) else {
            panic!("expected an array descriptor");
        };
        assert_eq!(*array.element, TypeDescriptor::Primitive(Primitive::Char));
        assert_eq!(array.length, Some(12));
    }

    #[test]
    fn test_opaque_pointer_wraps_void() {
        let TypeDescriptor::Pointer(pointer) = opaque_pointer() else {
            panic!("expected a pointer descriptor");
        };
        assert_eq!(*pointer.pointee, TypeDescriptor::Void);
    }
}
