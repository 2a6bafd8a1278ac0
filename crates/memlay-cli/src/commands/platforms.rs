//! Platforms command: list supported resolution contexts.

use anyhow::Result;
use memlay::{Platform, PlatformContext};

pub fn run() -> Result<()> {
    println!("Supported platforms:");
    for platform in Platform::ALL {
        let long_width = if platform.is_unix() {
            "pointer-width"
        } else {
            "4 bytes"
        };
        println!("  {platform:<8} (native long: {long_width})");
    }

    println!();
    println!("Supported bit widths: 32, 64");
    println!("Host default: {}", PlatformContext::host());

    Ok(())
}
