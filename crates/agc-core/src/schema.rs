//! Schema model for genome compilation.
//!
//! The input is a JSON document naming registers and the symbolic operation
//! wired to each. `meta`, `policy`, and `dna` are required; `mutation` is
//! optional and defaults to a static (non-scrambling) genome.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Identification block for the compiled genome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Human-readable target name, reported during compilation.
    pub name: String,
    /// Base filename of the output artifact, used verbatim.
    pub id: String,
}

/// Policy block. `security_level` is carried for operator visibility only;
/// the compiler does not interpret it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub security_level: String,
}

/// Polymorphism parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mutation {
    /// Register scramble period in milliseconds. 0 means static.
    #[serde(default)]
    pub scramble_freq_ms: u32,
}

/// Ordered register -> operation mapping.
///
/// JSON objects carry declaration order, and that order is semantically
/// significant: the genome is the concatenation of per-register tag
/// sequences in exactly this order. Entries are therefore kept as a list
/// of pairs rather than an unordered map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dna(Vec<(String, String)>);

impl Dna {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// Iterates `(register, operation)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(reg, op)| (reg.as_str(), op.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Dna {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (register, operation) in &self.0 {
            map.serialize_entry(register, operation)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Dna {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DnaVisitor;

        impl<'de> Visitor<'de> for DnaVisitor {
            type Value = Dna;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of register names to operation strings")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Dna, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(Dna(entries))
            }
        }

        deserializer.deserialize_map(DnaVisitor)
    }
}

/// A complete input schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    pub meta: Meta,
    pub policy: Policy,
    pub dna: Dna,
    #[serde(default)]
    pub mutation: Mutation,
}

impl Schema {
    /// Reads and validates a schema file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::SchemaRead {
            path: path.to_path_buf(),
            source,
        })?;
        let schema: Schema =
            serde_json::from_reader(BufReader::new(file)).map_err(classify_json_error)?;
        schema.validate()?;
        tracing::debug!(
            path = %path.display(),
            registers = schema.dna.len(),
            "loaded schema"
        );
        Ok(schema)
    }

    /// Parses and validates a schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: Schema = serde_json::from_str(json).map_err(classify_json_error)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Checks the constraints serde cannot express on its own.
    pub fn validate(&self) -> Result<()> {
        if self.meta.name.is_empty() {
            return Err(Error::SchemaValidation(
                "meta.name must not be empty".to_string(),
            ));
        }
        if self.meta.id.is_empty() {
            return Err(Error::SchemaValidation(
                "meta.id must not be empty".to_string(),
            ));
        }
        // meta.id becomes the artifact filename
        if self.meta.id.contains(['/', '\\']) {
            return Err(Error::SchemaValidation(format!(
                "meta.id {:?} is not usable as a file stem",
                self.meta.id
            )));
        }
        Ok(())
    }
}

/// Splits serde_json failures into the parse/validation taxonomy: syntax and
/// EOF problems mean the document is not well-formed, data problems mean a
/// required field is absent or has the wrong type (serde names the field).
fn classify_json_error(err: serde_json::Error) -> Error {
    match err.classify() {
        serde_json::error::Category::Data => Error::SchemaValidation(err.to_string()),
        _ => Error::SchemaParse(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "meta": {"name": "pipeline", "id": "pipeline_v1"},
        "policy": {"security_level": "DOD"},
        "dna": {"r0": "FILTER_PACKETS", "r1": "ENCRYPT_AES", "r2": "STORE_LEDGER"},
        "mutation": {"scramble_freq_ms": 250}
    }"#;

    #[test]
    fn test_parse_full_schema() {
        let schema = Schema::from_json(FULL).unwrap();
        assert_eq!(schema.meta.name, "pipeline");
        assert_eq!(schema.meta.id, "pipeline_v1");
        assert_eq!(schema.policy.security_level, "DOD");
        assert_eq!(schema.dna.len(), 3);
        assert_eq!(schema.mutation.scramble_freq_ms, 250);
    }

    #[test]
    fn test_dna_preserves_declaration_order() {
        let schema = Schema::from_json(FULL).unwrap();
        let registers: Vec<&str> = schema.dna.entries().map(|(reg, _)| reg).collect();
        assert_eq!(registers, vec!["r0", "r1", "r2"]);
    }

    #[test]
    fn test_mutation_section_optional() {
        let schema = Schema::from_json(
            r#"{
                "meta": {"name": "n", "id": "i"},
                "policy": {"security_level": "LOW"},
                "dna": {}
            }"#,
        )
        .unwrap();
        assert_eq!(schema.mutation.scramble_freq_ms, 0);
        assert!(schema.dna.is_empty());
    }

    #[test]
    fn test_missing_id_is_validation_error() {
        let err = Schema::from_json(
            r#"{
                "meta": {"name": "n"},
                "policy": {"security_level": "LOW"},
                "dna": {}
            }"#,
        )
        .unwrap_err();
        match err {
            Error::SchemaValidation(msg) => assert!(msg.contains("id"), "got: {msg}"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Schema::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::SchemaParse(_)));
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = Schema::from_json(
            r#"{
                "meta": {"name": "n", "id": ""},
                "policy": {"security_level": "LOW"},
                "dna": {}
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::SchemaValidation(_)));
    }

    #[test]
    fn test_id_with_path_separator_rejected() {
        let err = Schema::from_json(
            r#"{
                "meta": {"name": "n", "id": "../escape"},
                "policy": {"security_level": "LOW"},
                "dna": {}
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::SchemaValidation(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Schema::load(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert!(matches!(err, Error::SchemaRead { .. }));
    }

    #[test]
    fn test_dna_serializes_as_map() {
        let dna = Dna::from_pairs(vec![
            ("r0".to_string(), "FILTER".to_string()),
            ("r1".to_string(), "STORE".to_string()),
        ]);
        let json = serde_json::to_string(&dna).unwrap();
        assert_eq!(json, r#"{"r0":"FILTER","r1":"STORE"}"#);
    }
}
