//! The closed primitive vocabulary and its platform-indexed size table.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, FromRepr, IntoStaticStr};

use crate::platform::{Bits, PlatformContext};

/// Atomic layout leaves.
///
/// Fixed-width types have the same size everywhere. `Long`/`Ulong` follow the
/// native C ABI (4 bytes under LLP64 Windows, pointer width under LP64).
/// Pointer-width types and `String` (a pointer to NUL-terminated data) track
/// the context's bit width.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Primitive {
    // Native C integer types
    Byte = 0,
    Ubyte = 1,
    Short = 2,
    Ushort = 3,
    Int = 4,
    Uint = 5,
    Long = 6,
    Ulong = 7,
    Longlong = 8,
    Ulonglong = 9,

    // Fixed-width integer types
    Int8 = 10,
    Uint8 = 11,
    Int16 = 12,
    Uint16 = 13,
    Int32 = 14,
    Uint32 = 15,
    Int64 = 16,
    Uint64 = 17,

    // Pointer-width integer and size types
    Intptr = 18,
    Uintptr = 19,
    Intsize = 20,
    Uintsize = 21,

    // Floating-point types
    Float = 22,
    Double = 23,
    Float32 = 24,
    Float64 = 25,

    Bool = 26,
    Char = 27,

    /// Pointer to NUL-terminated character data; laid out as a pointer.
    String = 28,
}

impl Primitive {
    /// Size in bytes under the given context.
    pub fn size(self, context: PlatformContext) -> usize {
        use Primitive::*;

        match self {
            Byte | Ubyte | Int8 | Uint8 | Bool | Char => 1,
            Short | Ushort | Int16 | Uint16 => 2,
            Int | Uint | Int32 | Uint32 | Float | Float32 => 4,
            Longlong | Ulonglong | Int64 | Uint64 | Double | Float64 => 8,
            // LLP64 keeps long at 4 bytes; LP64 widens it with the pointer.
            Long | Ulong => {
                if context.platform.is_unix() {
                    context.pointer_size()
                } else {
                    4
                }
            }
            Intptr | Uintptr | Intsize | Uintsize | String => context.pointer_size(),
        }
    }

    /// Alignment in bytes under the given context.
    ///
    /// Equal to the size, except that 8-byte primitives align to 4 under
    /// 32-bit System V targets (MSVC aligns them to 8 even on i386).
    pub fn align(self, context: PlatformContext) -> usize {
        let size = self.size(context);

        if size == 8 && context.bits == Bits::Bits32 && context.platform.is_unix() {
            4
        } else {
            size
        }
    }

    pub fn is_signed(self) -> bool {
        use Primitive::*;

        matches!(
            self,
            Byte | Short
                | Int
                | Long
                | Longlong
                | Int8
                | Int16
                | Int32
                | Int64
                | Intptr
                | Intsize
                | Float
                | Double
                | Float32
                | Float64
                | Char
        )
    }

    pub fn is_float(self) -> bool {
        use Primitive::*;

        matches!(self, Float | Double | Float32 | Float64)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}
