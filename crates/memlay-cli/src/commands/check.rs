//! Check command: resolve every schema entry under every supported context.

use std::path::Path;

use anyhow::{Context, Result, bail};
use memlay::{Bits, Error, Platform, PlatformContext, Schema, resolve_in};
use tracing::{info, warn};

/// One resolution that failed during a schema check.
#[derive(Debug)]
pub struct CheckFailure {
    pub name: String,
    pub context: PlatformContext,
    pub error: Error,
}

/// Resolve every registered type under every supported `(bits, platform)`
/// pair and collect the failures.
pub fn check_schema(schema: &Schema) -> Vec<CheckFailure> {
    let mut failures = Vec::new();

    for (name, descriptor) in schema.iter() {
        for bits in Bits::ALL {
            for platform in Platform::ALL {
                let context = PlatformContext::new(bits, platform);
                if let Err(error) = resolve_in(descriptor, schema, context) {
                    failures.push(CheckFailure {
                        name: name.to_string(),
                        context,
                        error,
                    });
                }
            }
        }
    }

    failures
}

/// Run the check command
pub fn run(schema_path: &Path) -> Result<()> {
    let schema = Schema::load(schema_path)
        .with_context(|| format!("failed to load schema from {}", schema_path.display()))?;

    let total = schema.len() * Bits::ALL.len() * Platform::ALL.len();
    let failures = check_schema(&schema);

    for failure in &failures {
        warn!(
            "`{}` under {} failed: {}",
            failure.name, failure.context, failure.error
        );
        println!("FAIL  {:<24} {}  {}", failure.name, failure.context, failure.error);
    }

    info!(
        "Checked {} types under {} contexts",
        schema.len(),
        Bits::ALL.len() * Platform::ALL.len()
    );
    println!("{} of {} resolutions succeeded", total - failures.len(), total);

    if !failures.is_empty() {
        bail!("{} of {} resolutions failed", failures.len(), total);
    }

    Ok(())
}
