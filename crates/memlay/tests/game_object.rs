//! End-to-end layout of a realistic game-object schema, resolved for several
//! platforms from one shared descriptor graph.

use memlay::prelude::*;

/// A vtable'd game object the way a C++ engine would lay it out:
///
/// ```text
/// struct GameObject {            // vtable pointer at offset 0
///     int32    id;
///     float32  x, y;
///     fill     pad[8];           // fixed opaque region
///     fill     platform_pad;     // windows=4, macos=8
///     char*    name;             // string primitive
///     Manager* manager;          // back-pointer, breaks the cycle
/// };
/// struct Manager {
///     uint32      count;
///     GameObject  slots[];       // flexible tail
/// };
/// ```
fn game_schema() -> Schema {
    let mut schema = Schema::new();

    schema.register(
        "GameObject",
        StructDescriptor::named(
            "GameObject",
            vec![
                Field::new("id", Primitive::Int32.into()),
                Field::new("x", Primitive::Float32.into()),
                Field::new("y", Primitive::Float32.into()),
                Field::new("pad", fill(8)),
                Field::new(
                    "platform_pad",
                    dynamic_fill([
                        FillEntry::new(Platform::Windows, 4),
                        FillEntry::new(Platform::Macos, 8),
                    ]),
                ),
                Field::new("name", Primitive::String.into()),
                Field::new("manager", mut_pointer(named("Manager"), false)),
            ],
        )
        .with_vtable()
        .into(),
    );

    schema.register(
        "Manager",
        StructDescriptor::named(
            "Manager",
            vec![
                Field::new("count", Primitive::Uint32.into()),
                Field::new("slots", mut_array(named("GameObject"), None)),
            ],
        )
        .into(),
    );

    schema
}

#[test]
fn game_object_layout_64_bit_windows() {
    let schema = game_schema();
    let ctx = PlatformContext::new(Bits::Bits64, Platform::Windows);

    let object = resolve_in(&named("GameObject"), &schema, ctx).unwrap();
    // vtable slot occupies [0, 8)
    assert_eq!(object.offset_of("id"), Some(8));
    assert_eq!(object.offset_of("x"), Some(12));
    assert_eq!(object.offset_of("y"), Some(16));
    assert_eq!(object.offset_of("pad"), Some(20));
    assert_eq!(object.offset_of("platform_pad"), Some(28)); // 4 bytes on windows
    assert_eq!(object.offset_of("name"), Some(32));
    assert_eq!(object.offset_of("manager"), Some(40));
    assert_eq!(object.size(), 48);
    assert_eq!(object.align(), 8);
}

#[test]
fn game_object_layout_32_bit_macos() {
    let schema = game_schema();
    let ctx = PlatformContext::new(Bits::Bits32, Platform::Macos);

    let object = resolve_in(&named("GameObject"), &schema, ctx).unwrap();
    assert_eq!(object.offset_of("id"), Some(4));
    assert_eq!(object.offset_of("platform_pad"), Some(24)); // 8 bytes on macos
    assert_eq!(object.offset_of("name"), Some(32));
    assert_eq!(object.offset_of("manager"), Some(36));
    assert_eq!(object.size(), 40);
    assert_eq!(object.align(), 4);
}

#[test]
fn game_object_layout_fails_without_fill_entry() {
    let schema = game_schema();
    let ctx = PlatformContext::new(Bits::Bits64, Platform::Linux);

    let err = resolve_in(&named("GameObject"), &schema, ctx).unwrap_err();
    assert!(matches!(err, Error::MissingFillEntry { .. }));
}

#[test]
fn manager_flexible_tail_tracks_object_alignment() {
    let schema = game_schema();
    let ctx = PlatformContext::new(Bits::Bits64, Platform::Windows);

    let manager = resolve_in(&named("Manager"), &schema, ctx).unwrap();
    assert_eq!(manager.offset_of("count"), Some(0));
    assert_eq!(manager.offset_of("slots"), Some(8));
    assert_eq!(manager.size(), 8);
}

#[test]
fn schema_survives_json_round_trip_with_identical_layouts() {
    let schema = game_schema();
    let json = serde_json::to_string(&schema).unwrap();
    let restored: Schema = serde_json::from_str(&json).unwrap();

    let ctx = PlatformContext::new(Bits::Bits64, Platform::Windows);
    let before = resolve_in(&named("GameObject"), &schema, ctx).unwrap();
    let after = resolve_in(&named("GameObject"), &restored, ctx).unwrap();
    assert_eq!(before.layout, after.layout);
}
