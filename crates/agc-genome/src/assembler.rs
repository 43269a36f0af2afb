//! Genome assembly from schema registers.

use agc_core::Dna;

use crate::tag::Tag;
use crate::translator;

/// Flattens every register's operation into one tag stream.
///
/// Registers are visited in schema declaration order and their sequences
/// are concatenated with no boundary markers: the artifact does not record
/// which register contributed which tags.
pub fn assemble(dna: &Dna) -> Vec<Tag> {
    dna.entries()
        .flat_map(|(_, operation)| translator::translate(operation))
        .collect()
}
