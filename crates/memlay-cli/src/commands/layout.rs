//! Layout command: resolve one named type and print its field table.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, bail};
use memlay::{AccessorType, Bits, Platform, PlatformContext, Schema, TypeDescriptor, resolve_in};
use tracing::info;

/// Render a resolved layout as a human-readable table.
pub fn render(name: &str, accessor: &AccessorType) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{name} ({})", accessor.context);
    let _ = writeln!(
        out,
        "size: {}  align: {}  writable: {}",
        accessor.size(),
        accessor.align(),
        accessor.writable
    );

    match &accessor.descriptor {
        TypeDescriptor::Struct(descriptor) => {
            let _ = writeln!(out);
            if descriptor.vtable {
                let vtable_size = accessor.context.pointer_size();
                let _ = writeln!(out, "  {:>6}  {:<16}  <vtable> ({vtable_size} bytes)", 0, "");
            }
            for field in &descriptor.fields {
                let offset = accessor.offset_of(&field.name).unwrap_or_default();
                let _ = writeln!(out, "  {:>6}  {:<16}  {}", offset, field.name, field.ty);
            }
        }
        TypeDescriptor::Union(descriptor) => {
            let _ = writeln!(out);
            for member in &descriptor.members {
                let _ = writeln!(out, "  {:>6}  {:<16}  {}", 0, member.name, member.ty);
            }
        }
        _ => {}
    }

    out
}

/// Run the layout command
pub fn run(schema_path: &Path, type_name: &str, bits: Bits, platform: Platform) -> Result<()> {
    let schema = Schema::load(schema_path)
        .with_context(|| format!("failed to load schema from {}", schema_path.display()))?;
    info!("Loaded schema with {} types", schema.len());

    let Some(descriptor) = schema.get(type_name) else {
        bail!(
            "type `{type_name}` is not in the schema (available: {})",
            schema.names().collect::<Vec<_>>().join(", ")
        );
    };

    let context = PlatformContext::new(bits, platform);
    let accessor = resolve_in(descriptor, &schema, context)
        .with_context(|| format!("failed to resolve `{type_name}` under {context}"))?;

    print!("{}", render(type_name, &accessor));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use memlay::prelude::*;

    fn player_schema() -> Schema {
        let mut schema = Schema::new();
        schema.register(
            "Player",
            StructDescriptor::named(
                "Player",
                vec![
                    Field::new("id", Primitive::Int32.into()),
                    Field::new("score", Primitive::Int64.into()),
                    Field::new("name", pointer(Primitive::Char.into(), false)),
                ],
            )
            .into(),
        );
        schema
    }

    #[test]
    fn test_render_struct_table() {
        let schema = player_schema();
        let context = PlatformContext::new(Bits::Bits64, Platform::Windows);
        let accessor = resolve_in(schema.get("Player").unwrap(), &schema, context).unwrap();

        let table = render("Player", &accessor);
        assert!(table.starts_with("Player (64-bit windows)"));
        assert!(table.contains("size: 24  align: 8"));
        assert!(table.contains("0  id"));
        assert!(table.contains("8  score"));
        assert!(table.contains("16  name"));
        assert!(table.contains("pointer(char)"));
    }

    #[test]
    fn test_render_scalar_has_no_field_table() {
        let context = PlatformContext::new(Bits::Bits32, Platform::Linux);
        let accessor = resolve(&Primitive::Uintptr.into(), context).unwrap();

        let table = render("uintptr", &accessor);
        assert!(table.contains("size: 4  align: 4"));
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_run_against_schema_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        player_schema().save(&path).unwrap();

        run(&path, "Player", Bits::Bits64, Platform::Windows).unwrap();
        assert!(run(&path, "Ghost", Bits::Bits64, Platform::Windows).is_err());
    }
}
