//! Compiler from schema to genome artifact.

use agc_core::{Result, Schema};
use serde::Serialize;
use tracing::info;

use crate::assembler;
use crate::header::{self, Header};
use crate::packer;

pub struct Compiler {
    config: CompilerConfig,
}

#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Extension given to artifact files.
    pub extension: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            extension: "gnm".to_string(),
        }
    }
}

/// Compilation statistics reported alongside the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompileStats {
    /// Number of tags in the flattened stream.
    pub tag_count: usize,
    /// Packed body length in bytes (header excluded).
    pub packed_len: usize,
    /// Effective compression relative to the 4-bits-per-symbol baseline;
    /// 0.0 when the packed body is empty.
    pub ratio: f64,
}

/// A compiled genome: header plus packed body. Immutable once built.
#[derive(Debug, Clone)]
pub struct Artifact {
    bytes: Vec<u8>,
    stats: CompileStats,
}

impl Artifact {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn stats(&self) -> CompileStats {
        self.stats
    }
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Output filename for a schema, derived from `meta.id`.
    pub fn output_filename(&self, schema: &Schema) -> String {
        format!("{}.{}", schema.meta.id, self.config.extension)
    }

    /// Runs the full pipeline: assemble the tag stream, pack it, and
    /// prepend the fixed header.
    pub fn compile(&self, schema: &Schema) -> Result<Artifact> {
        info!(
            target_name = %schema.meta.name,
            security_level = %schema.policy.security_level,
            "compiling genome"
        );

        let tags = assembler::assemble(&schema.dna);
        let packed = packer::pack(&tags);

        let stats = CompileStats {
            tag_count: tags.len(),
            packed_len: packed.len(),
            ratio: if packed.is_empty() {
                0.0
            } else {
                (tags.len() * 4) as f64 / packed.len() as f64
            },
        };

        let header = Header::new(schema.mutation.scramble_freq_ms);
        let mut bytes = Vec::with_capacity(header::LEN + packed.len());
        bytes.extend_from_slice(&header.to_bytes());
        bytes.extend_from_slice(&packed);

        info!(
            tags = stats.tag_count,
            packed_bytes = stats.packed_len,
            ratio = stats.ratio,
            "genome synthesized"
        );

        Ok(Artifact { bytes, stats })
    }
}
