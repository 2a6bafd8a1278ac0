//! Platform context: the (bit width, OS/ABI) pair every layout is computed against.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, FromRepr, IntoStaticStr};

/// Pointer width of the target process.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum Bits {
    #[serde(rename = "32")]
    #[strum(serialize = "32")]
    Bits32 = 32,
    #[serde(rename = "64")]
    #[strum(serialize = "64")]
    Bits64 = 64,
}

impl Bits {
    pub const ALL: [Bits; 2] = [Bits::Bits32, Bits::Bits64];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Pointer width in bytes.
    pub fn byte_width(self) -> usize {
        self as usize / 8
    }

    /// Bit width of the build host.
    pub fn host() -> Self {
        if cfg!(target_pointer_width = "64") {
            Bits::Bits64
        } else {
            Bits::Bits32
        }
    }
}

/// Target OS/ABI. Decides native `long` width and 32-bit alignment rules.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
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
pub enum Platform {
    Windows = 0,
    Macos = 1,
    Linux = 2,
    Android = 3,
    Ios = 4,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Windows,
        Platform::Macos,
        Platform::Linux,
        Platform::Android,
        Platform::Ios,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Everything except Windows follows the LP64/System V conventions here.
    pub fn is_unix(self) -> bool {
        !matches!(self, Platform::Windows)
    }

    /// Platform of the build host. Unrecognized targets fall back to Linux.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Macos
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Linux
        }
    }
}

/// Concrete platform a descriptor is resolved against.
///
/// The core never detects this at runtime; it is supplied explicitly or taken
/// from a [`TargetState`](crate::state::TargetState) handle. [`PlatformContext::host`]
/// is a compile-time default for tooling convenience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformContext {
    pub bits: Bits,
    pub platform: Platform,
}

impl PlatformContext {
    pub fn new(bits: Bits, platform: Platform) -> Self {
        Self { bits, platform }
    }

    /// Context of the build host.
    pub fn host() -> Self {
        Self::new(Bits::host(), Platform::host())
    }

    /// Pointer size in bytes under this context.
    pub fn pointer_size(&self) -> usize {
        self.bits.byte_width()
    }
}

impl std::fmt::Display for PlatformContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit {}", self.bits, self.platform)
    }
}
