//! Named descriptor registry.
//!
//! A schema maps nominal names to descriptors so that composites can refer to
//! each other (and, through a pointer, to themselves). Schemas are plain data
//! and round-trip through JSON.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::marker::TypeDescriptor;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    types: BTreeMap<String, TypeDescriptor>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under a name, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, descriptor: TypeDescriptor) {
        self.types.insert(name.into(), descriptor);
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
        self.types.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Load a schema from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the schema as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::build::{array, pointer};
    use crate::marker::{Field, Primitive, StructDescriptor};

    fn sample_schema() -> Schema {
        let mut schema = Schema::new();
        schema.register(
            "Header",
            StructDescriptor::named(
                "Header",
                vec![
                    Field::new("magic", Primitive::Uint32.into()),
                    Field::new("payload", array(Primitive::Uint8.into(), Some(16))),
                ],
            )
            .into(),
        );
        schema.register("HeaderPtr", pointer(Primitive::Uint32.into(), false));
        schema
    }

    #[test]
    fn test_register_and_lookup() {
        let schema = sample_schema();
        assert_eq!(schema.len(), 2);
        assert!(schema.contains("Header"));
        assert!(schema.get("Missing").is_none());
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["Header", "HeaderPtr"]);
    }

    #[test]
    fn test_json_round_trip() {
        let schema = sample_schema();
        let json = serde_json::to_string(&schema).unwrap();
        let restored: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(schema, restored);
    }

    #[test]
    fn test_load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");

        let schema = sample_schema();
        schema.save(&path).unwrap();
        let restored = Schema::load(&path).unwrap();
        assert_eq!(schema, restored);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Schema::load("/nonexistent/schema.json").unwrap_err();
        assert!(!err.is_structural());
    }
}
